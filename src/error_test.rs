use super::*;

#[test]
fn missing_is_a_disabled_feature() {
    assert!(BindError::missing("#navbar").is_missing());
    assert!(!BindError::Js("boom".into()).is_missing());
}

#[test]
fn display_names_the_anchor() {
    assert_eq!(BindError::missing("#navbar").to_string(), "no element matches #navbar");
    let err = BindError::WrongType { anchor: "#contact-form".into(), expected: "form" };
    assert_eq!(err.to_string(), "#contact-form is not a form");
}
