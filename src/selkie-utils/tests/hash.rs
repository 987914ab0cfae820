use selkie_utils::hash::*;

#[test]
fn test_djb2() {
    assert_eq!(djb2(""), 5381);
    assert_eq!(djb2("A"), 177638);
    assert_eq!(djb2("Ping"), 2089466643);
    assert_eq!(djb2("Message"), 520005322);
}

#[test]
fn test_djb2_is_order_sensitive() {
    assert_ne!(djb2("AB"), djb2("BA"));
}
