//! BDD step definitions for status classification feature

use cucumber::{given, then};
use nominations_core::{color_for, is_displayable, label_for};

use crate::world::NominationsWorld;

#[given(expr = "a nomination status of {int}")]
fn status_of(world: &mut NominationsWorld, code: i64) {
    world.status_code = Some(code);
}

#[then(expr = "the status label should be {string}")]
fn label_is(world: &mut NominationsWorld, expected: String) {
    let code = world.status_code.expect("status not set");
    assert_eq!(label_for(code), expected);
}

#[then(expr = "the status color should be {string}")]
fn color_is(world: &mut NominationsWorld, expected: String) {
    let code = world.status_code.expect("status not set");
    assert_eq!(color_for(code).token(), expected);
}

#[then("the nomination should be displayed")]
fn displayed(world: &mut NominationsWorld) {
    let code = world.status_code.expect("status not set");
    assert!(is_displayable(code), "status {} should be displayed", code);
}

#[then("the nomination should be hidden")]
fn hidden(world: &mut NominationsWorld) {
    let code = world.status_code.expect("status not set");
    assert!(!is_displayable(code), "status {} should be hidden", code);
}
