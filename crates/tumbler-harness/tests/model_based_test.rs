//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! lock behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: secret + Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!      ModelLock       RealLock       Compare
//!      (reference)   (tumbler-core)   results + state
//! ```
//!
//! Letters are drawn mostly from `A`-`C` and secrets only from `A`-`C`, so
//! random dialing hits the secret often enough to exercise the open path.

use proptest::prelude::*;
use tumbler_core::Combination;
use tumbler_harness::{
    ComboInput, DialInput, ModelLock, Operation, OperationError, OperationResult, RealLock,
};
use tumbler_search::Searcher;

/// Strategy for dial inputs, weighted towards a tiny alphabet.
fn dial_strategy() -> impl Strategy<Value = DialInput> {
    prop_oneof![
        8 => (0u8..3).prop_map(DialInput),
        1 => any::<u8>().prop_map(DialInput),
    ]
}

/// Strategy for secrets over `A`-`C`.
fn secret_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..3, 3).prop_map(|v| v.iter().map(|n| char::from(b'A' + n)).collect())
}

/// Strategy for re-key inputs, mostly valid.
fn combo_strategy() -> impl Strategy<Value = ComboInput> {
    (prop::array::uniform3(dial_strategy()), any::<u8>())
        .prop_map(|(chars, len_class)| ComboInput { chars, len_class })
}

/// Strategy for operations.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        // Dialing dominates, as it does for a real caller
        6 => dial_strategy().prop_map(|position| Operation::SetPosition { position }),
        3 => Just(Operation::Open),
        1 => Just(Operation::Lock),
        1 => combo_strategy().prop_map(|combination| Operation::LockAndChangeCombination { combination }),
    ]
}

fn dial_ops(text: &str) -> Vec<Operation> {
    text.bytes().map(|b| Operation::SetPosition { position: DialInput(b - b'A') }).collect()
}

#[test]
fn constructors_agree_on_invalid_secrets() {
    for secret in ["abc", "AB", "", "ABCD", "A1C"] {
        assert_eq!(ModelLock::new(secret).unwrap_err(), OperationError::InvalidCombination);
        assert_eq!(RealLock::new(secret).unwrap_err(), OperationError::InvalidCombination);
    }
}

#[test]
fn guard_scenario_matches_model() {
    let mut model = ModelLock::new("ABC").unwrap();
    let mut real = RealLock::new("ABC").unwrap();

    let mut ops = vec![Operation::Lock];
    ops.extend(dial_ops("ABX"));
    ops.push(Operation::Open);
    ops.push(Operation::Open);
    ops.extend(dial_ops("C"));
    ops.push(Operation::Open);
    ops.extend(dial_ops("ABC"));
    ops.push(Operation::Open);

    for op in &ops {
        assert_eq!(model.apply(op), real.apply(op), "diverged at {op:?}");
        assert_eq!(model.observable_state(), real.observable_state(), "diverged at {op:?}");
    }
    assert!(real.lock().is_open());
}

proptest! {
    /// Verify that operation results and observable state match between
    /// model and real lock after every step.
    #[test]
    fn prop_model_matches_real(
        secret in secret_strategy(),
        ops in prop::collection::vec(operation_strategy(), 0..80)
    ) {
        let mut model = ModelLock::new(&secret).unwrap();
        let mut real = RealLock::new(&secret).unwrap();

        for (i, op) in ops.iter().enumerate() {
            let model_result = model.apply(op);
            let real_result = real.apply(op);

            prop_assert_eq!(
                &model_result, &real_result,
                "Divergence at operation {}: {:?}", i, op
            );
            prop_assert_eq!(
                model.observable_state(), real.observable_state(),
                "State divergence at operation {}: {:?}", i, op
            );
        }
    }

    /// A failed open is never followed by a successful open without dialing.
    #[test]
    fn prop_failed_open_cannot_repeat(
        secret in secret_strategy(),
        ops in prop::collection::vec(operation_strategy(), 0..80)
    ) {
        let mut real = RealLock::new(&secret).unwrap();
        let mut failed_since_dial = false;

        for op in &ops {
            let result = real.apply(op);
            match op {
                Operation::Open if failed_since_dial => {
                    prop_assert!(!real.lock().is_open(), "Repeated open succeeded");
                },
                Operation::Open => failed_since_dial = !real.lock().is_open(),
                Operation::Lock | Operation::LockAndChangeCombination { .. } => {
                    failed_since_dial = failed_since_dial || result.is_ok();
                },
                Operation::SetPosition { .. } if result.is_ok() => failed_since_dial = false,
                Operation::SetPosition { .. } => {},
            }
        }
    }

    /// Re-keying a closed lock never changes the secret.
    #[test]
    fn prop_closed_rekey_keeps_secret(
        secret in secret_strategy(),
        combination in combo_strategy()
    ) {
        let mut model = ModelLock::new(&secret).unwrap();
        let mut real = RealLock::new(&secret).unwrap();

        for lock in [Operation::Lock, Operation::LockAndChangeCombination { combination }] {
            prop_assert_eq!(model.apply(&lock), OperationResult::Ok);
            prop_assert_eq!(real.apply(&lock), OperationResult::Ok);
        }
        prop_assert_eq!(model.secret(), secret.as_str());

        // Probe with the old secret
        let mut probe = dial_ops(&secret);
        probe.push(Operation::Open);
        for op in &probe {
            real.apply(op);
        }
        prop_assert!(real.lock().is_open());
    }

    /// Re-keying an open lock with a valid combination installs it and closes.
    #[test]
    fn prop_open_rekey_installs_secret(
        secret in secret_strategy(),
        new_secret in secret_strategy()
    ) {
        let mut real = RealLock::new(&secret).unwrap();
        let rekey = Operation::LockAndChangeCombination { combination: ComboInput::letters(&new_secret) };

        prop_assert_eq!(real.apply(&rekey), OperationResult::Ok);
        prop_assert!(!real.lock().is_open());

        let mut probe = dial_ops(&new_secret);
        probe.push(Operation::Open);
        for op in &probe {
            real.apply(op);
        }
        prop_assert!(real.lock().is_open());
    }

    /// After any operation sequence the searcher still recovers the secret
    /// the model holds, at the model secret's rank.
    #[test]
    fn prop_search_after_random_use(
        secret in secret_strategy(),
        ops in prop::collection::vec(operation_strategy(), 0..40)
    ) {
        let mut model = ModelLock::new(&secret).unwrap();
        let mut real = RealLock::new(&secret).unwrap();
        for op in &ops {
            model.apply(op);
            real.apply(op);
        }

        let expected = Combination::new(model.secret()).unwrap();
        let mut searcher = Searcher::new(real.lock_mut());
        let found = searcher.find_combination().unwrap();

        prop_assert_eq!(found, Some(expected));
        prop_assert_eq!(searcher.attempts(), Some(u64::from(expected.rank())));
    }
}
