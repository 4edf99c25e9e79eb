//! English message table.

/// `(key, message)` pairs. Messages may contain `{{param}}` placeholders
/// substituted by [`super::t_with`].
pub(super) const MESSAGES: &[(&str, &str)] = &[
    // Shared chrome.
    ("common.appName", "Channelboard"),
    ("nav.addChannel", "Add channel"),
    ("nav.topics", "Topics"),
    // Channel registration.
    ("add.channel.title", "Add your channel"),
    (
        "add.channel.subTitle",
        "Submit a channel to the catalog and start tracking its statistics",
    ),
    ("add.channel.inputs.username.label", "Username"),
    ("add.channel.inputs.username.placeholder", "@channel"),
    ("add.channel.inputs.geo.label", "Region"),
    ("add.channel.inputs.geo.placeholder", "Where is the audience from?"),
    ("add.channel.inputs.language.label", "Language"),
    ("add.channel.inputs.language.placeholder", "Language of the posts"),
    ("add.channel.inputs.category.label", "Category"),
    ("add.channel.inputs.category.placeholder", "What is the channel about?"),
    ("add.channel.send", "Send"),
    ("add.channel.validation.username", "Channel username is required"),
    ("add.channel.validation.geo", "Choose the channel's region"),
    ("add.channel.validation.language", "Choose the channel's language"),
    ("add.channel.validation.category", "Choose a category"),
    (
        "add.channel.done.message",
        "Channel submitted! It will appear in the catalog after review.",
    ),
    ("add.channel.done.addMore", "Add one more"),
    ("add.channel.errors.title", "Could not add the channel"),
    (
        "add.channel.errors.CONFLICT_CHANNEL",
        "This channel has already been added",
    ),
    (
        "add.channel.errors.CONFLICT_REQUEST",
        "A request for this channel is already pending",
    ),
    (
        "add.channel.errors.CONFLICT_WRONG_ENTITY",
        "That username does not belong to a channel",
    ),
    (
        "add.channel.errors.NOT_FOUND_CATEGORY",
        "The selected category no longer exists",
    ),
    (
        "add.channel.errors.NOT_FOUND_CHAT",
        "No channel with that username was found",
    ),
    (
        "add.channel.errors.NOT_FOUND_FULL_CHAT",
        "The channel's details could not be loaded",
    ),
    (
        "add.channel.errors.NOT_FOUND_WORKER",
        "No collector is available right now, try again later",
    ),
    (
        "add.channel.errors.TOTAL_ERROR",
        "The channel could not be processed",
    ),
    (
        "add.channel.errors.default",
        "Something went wrong, please try again",
    ),
    // Topics.
    ("topics.title", "Discussion topics"),
    ("topics.create", "Create topic"),
    ("topics.empty", "No topics yet"),
    ("topics.modals.create.title", "Create a topic"),
    ("topics.modals.create.inputs.name.label", "Name"),
    ("topics.modals.create.inputs.name.placeholder", "Short topic name"),
    ("topics.modals.create.inputs.description.label", "Description"),
    (
        "topics.modals.create.inputs.description.placeholder",
        "What is this topic about?",
    ),
    ("topics.modals.create.inputs.link.label", "Link"),
    ("topics.modals.create.inputs.link.placeholder", "topic-link"),
    (
        "topics.modals.create.inputs.link.help",
        "Short identifier used in the topic's URL",
    ),
    ("topics.modals.create.inputs.button", "Create"),
    ("topics.modals.create.validation.name", "Topic name is required"),
    (
        "topics.modals.create.validation.description",
        "Topic description is required",
    ),
    ("topics.modals.create.validation.link", "Topic link is required"),
    ("topics.modals.create.created.title", "Topic created"),
    ("topics.modals.create.created.createMore", "Create one more"),
    ("topics.modals.create.notifications.success.title", "Topic created"),
    (
        "topics.modals.create.notifications.success.message",
        "\"{{name}}\" is now open for discussion",
    ),
    (
        "topics.modals.create.notifications.addTitle",
        "Could not create the topic",
    ),
    (
        "topics.modals.create.notifications.errors.UNAUTHORIZED",
        "You need to sign in to create topics",
    ),
    (
        "topics.modals.create.notifications.errors.CONFLICT",
        "A topic with this link already exists",
    ),
    (
        "topics.modals.create.notifications.errors.default",
        "Something went wrong, please try again",
    ),
    // Statistics.
    ("stats.pageTitle", "Channel statistics"),
    ("stats.charts.rangeTitle", "Time range"),
    ("stats.charts.stepTitle", "Step"),
    ("stats.charts.range.week", "Week"),
    ("stats.charts.range.month", "Month"),
    ("stats.charts.range.year", "Year"),
    ("stats.charts.range.all", "All time"),
    ("stats.charts.step.day", "Day"),
    ("stats.charts.step.week", "Week"),
    ("stats.charts.step.month", "Month"),
    ("stats.charts.empty", "No data for this range"),
    ("stats.blocks.subscribers.title", "Subscribers"),
    (
        "stats.blocks.subscribers.about",
        "How many people follow the channel over time",
    ),
    ("stats.blocks.subscribers.tooltip", "subscribers"),
    ("stats.blocks.views.title", "Views per post"),
    (
        "stats.blocks.views.about",
        "Average number of views a single post collects",
    ),
    ("stats.blocks.views.tooltip", "views"),
    ("stats.blocks.total_views.title", "Total views"),
    (
        "stats.blocks.total_views.about",
        "Cumulative views across all posts",
    ),
    ("stats.blocks.total_views.tooltip", "views"),
    ("stats.blocks.err.title", "Engagement rate"),
    (
        "stats.blocks.err.about",
        "Share of subscribers who view an average post",
    ),
    ("stats.blocks.err.tooltip", "ERR"),
    ("stats.blocks.posts.title", "Posts"),
    ("stats.blocks.posts.about", "How many posts the channel publishes"),
    ("stats.blocks.posts.tooltip", "posts"),
    ("stats.blocks.involvement.title", "Involvement"),
    (
        "stats.blocks.involvement.about",
        "Share of subscribers who react to or share an average post",
    ),
    ("stats.blocks.involvement.tooltip", "involvement"),
    // Region labels.
    ("common.geo.us", "United States"),
    ("common.geo.gb", "United Kingdom"),
    ("common.geo.de", "Germany"),
    ("common.geo.fr", "France"),
    ("common.geo.es", "Spain"),
    ("common.geo.it", "Italy"),
    ("common.geo.br", "Brazil"),
    ("common.geo.in", "India"),
    ("common.geo.ru", "Russia"),
    ("common.geo.ua", "Ukraine"),
    // Language labels.
    ("common.languages.en", "English"),
    ("common.languages.de", "German"),
    ("common.languages.fr", "French"),
    ("common.languages.es", "Spanish"),
    ("common.languages.it", "Italian"),
    ("common.languages.pt", "Portuguese"),
    ("common.languages.ru", "Russian"),
    ("common.languages.uk", "Ukrainian"),
    ("common.languages.hi", "Hindi"),
    // Category labels for the bundled catalog taxonomy.
    ("common.categories.news", "News"),
    ("common.categories.tech", "Technology"),
    ("common.categories.crypto", "Crypto"),
    ("common.categories.sport", "Sport"),
    ("common.categories.entertainment", "Entertainment"),
    ("common.categories.education", "Education"),
];
