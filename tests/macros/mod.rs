use partial_chain::{chain, SafetyLevel};

#[test]
fn macro_defaults_to_panic_check() {
    let built = chain!(3_i32);

    assert_eq!(built.value(), Some(&3));
    assert_eq!(built.safety_level(), SafetyLevel::PanicCheck);
}

#[test]
fn macro_accepts_an_explicit_level() {
    let built = chain!(3_i32, SafetyLevel::None);

    assert_eq!(built.value(), Some(&3));
    assert_eq!(built.safety_level(), SafetyLevel::None);
}

#[test]
fn macro_tolerates_trailing_commas() {
    let built = chain!(1_i32,);
    assert_eq!(built.value(), Some(&1));

    let levelled = chain!(1_i32, SafetyLevel::NoneCheck,);
    assert_eq!(levelled.safety_level(), SafetyLevel::NoneCheck);
}
