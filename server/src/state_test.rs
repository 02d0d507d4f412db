use super::*;
use super::test_helpers::{MockLlm, test_app_state, test_app_state_with_llm};

#[test]
fn test_app_state_has_no_llm() {
    let state = test_app_state();
    assert!(state.llm.is_none());
    assert_eq!(state.chat, ChatSettings::default());
}

#[test]
fn test_app_state_with_llm_is_configured() {
    let state = test_app_state_with_llm(Arc::new(MockLlm::new(vec![])));
    assert!(state.llm.is_some());
}

#[test]
fn app_state_clone_shares_llm() {
    let state = test_app_state_with_llm(Arc::new(MockLlm::new(vec![])));
    let cloned = state.clone();
    let (Some(a), Some(b)) = (&state.llm, &cloned.llm) else {
        panic!("expected configured llm");
    };
    assert!(Arc::ptr_eq(a, b));
}
