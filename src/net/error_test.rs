use super::*;

fn server_error(code: &str) -> ApiError {
    ApiError::Server {
        status: 409,
        code: Some(code.to_owned()),
    }
}

#[test]
fn every_channel_code_classifies_to_its_variant() {
    let cases = [
        ("CONFLICT_CHANNEL", ChannelCreateError::ConflictChannel),
        ("CONFLICT_REQUEST", ChannelCreateError::ConflictRequest),
        ("CONFLICT_WRONG_ENTITY", ChannelCreateError::ConflictWrongEntity),
        ("NOT_FOUND_CATEGORY", ChannelCreateError::NotFoundCategory),
        ("NOT_FOUND_CHAT", ChannelCreateError::NotFoundChat),
        ("NOT_FOUND_FULL_CHAT", ChannelCreateError::NotFoundFullChat),
        ("NOT_FOUND_WORKER", ChannelCreateError::NotFoundWorker),
        ("TOTAL_ERROR", ChannelCreateError::TotalError),
    ];
    for (code, expected) in cases {
        assert_eq!(ChannelCreateError::classify(&server_error(code)), expected);
    }
}

#[test]
fn unknown_channel_code_falls_back_to_default() {
    assert_eq!(
        ChannelCreateError::classify(&server_error("SOMETHING_NEW")),
        ChannelCreateError::Default
    );
}

#[test]
fn channel_errors_without_a_code_fall_back_to_default() {
    assert_eq!(
        ChannelCreateError::classify(&ApiError::Network("offline".to_owned())),
        ChannelCreateError::Default
    );
    assert_eq!(
        ChannelCreateError::classify(&ApiError::Server {
            status: 500,
            code: None,
        }),
        ChannelCreateError::Default
    );
}

#[test]
fn channel_message_keys_follow_the_code_names() {
    assert_eq!(
        ChannelCreateError::ConflictChannel.message_key(),
        "add.channel.errors.CONFLICT_CHANNEL"
    );
    assert_eq!(
        ChannelCreateError::Default.message_key(),
        "add.channel.errors.default"
    );
}

#[test]
fn topic_codes_classify_to_their_variants() {
    assert_eq!(
        TopicCreateError::classify(&server_error("UNAUTHORIZED")),
        TopicCreateError::Unauthorized
    );
    assert_eq!(
        TopicCreateError::classify(&server_error("CONFLICT")),
        TopicCreateError::Conflict
    );
}

#[test]
fn topic_codes_from_the_other_workflow_fall_back_to_default() {
    // Channel codes mean nothing to the topic workflow.
    assert_eq!(
        TopicCreateError::classify(&server_error("CONFLICT_CHANNEL")),
        TopicCreateError::Default
    );
    assert_eq!(
        TopicCreateError::classify(&ApiError::Unavailable),
        TopicCreateError::Default
    );
}

#[test]
fn classified_messages_resolve_through_the_localization_table() {
    // A known code and the fallback both have real messages.
    let known = crate::i18n::t(TopicCreateError::Conflict.message_key());
    let fallback = crate::i18n::t(TopicCreateError::Default.message_key());
    assert_ne!(known, TopicCreateError::Conflict.message_key());
    assert_ne!(fallback, TopicCreateError::Default.message_key());
    assert_ne!(known, fallback);
}
