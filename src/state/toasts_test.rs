use super::*;

#[test]
fn show_appends_in_order_with_increasing_ids() {
    let mut toasts = ToastsState::default();
    let first = toasts.show(ToastColor::Green, "ok".to_owned(), "done".to_owned());
    let second = toasts.show(ToastColor::Red, "fail".to_owned(), "broke".to_owned());

    assert!(second > first);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[0].title, "ok");
    assert_eq!(toasts.items[1].color, ToastColor::Red);
}

#[test]
fn dismiss_removes_only_the_given_toast() {
    let mut toasts = ToastsState::default();
    let first = toasts.show(ToastColor::Green, "a".to_owned(), String::new());
    let second = toasts.show(ToastColor::Green, "b".to_owned(), String::new());

    toasts.dismiss(first);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut toasts = ToastsState::default();
    toasts.show(ToastColor::Green, "a".to_owned(), String::new());
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn ids_stay_unique_after_dismissal() {
    let mut toasts = ToastsState::default();
    let first = toasts.show(ToastColor::Green, "a".to_owned(), String::new());
    toasts.dismiss(first);
    let second = toasts.show(ToastColor::Green, "b".to_owned(), String::new());
    assert_ne!(first, second);
    assert_eq!(toasts.latest_id(), second);
}
