//! Fuzz target for [`Lock`] state machine
//!
//! Drive the lock with arbitrary operation sequences and check it against
//! the reference model after every step.
//!
//! # Invariants
//!
//! - Every result and every window snapshot matches `ModelLock`
//! - `Open` is only reachable from an open attempt whose window equals the
//!   secret, never from dialing or closing
//! - After a failed or forced close the newest window slot is the sentinel
//! - A second `open()` with no dialing in between repeats the first result
//! - NEVER panic on rejected input

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tumbler_core::LockState;
use tumbler_harness::{ComboInput, ModelLock, Operation, RealLock};

/// Fuzz input: initial secret plus the operations to apply.
#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    secret: ComboInput,
    events: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let secret = input.secret.to_text();
    let (mut model, mut real) = match (ModelLock::new(&secret), RealLock::new(&secret)) {
        (Ok(model), Ok(real)) => (model, real),
        (Err(model_err), Err(real_err)) => {
            assert_eq!(model_err, real_err);
            return;
        },
        (model, real) => panic!("constructors disagree on {secret:?}: {model:?} vs {real:?}"),
    };

    for op in &input.events {
        let previous = real.lock().state();
        let model_result = model.apply(op);
        let real_result = real.apply(op);

        assert_eq!(model_result, real_result, "result divergence at {op:?}");
        assert_eq!(
            model.observable_state(),
            real.observable_state(),
            "state divergence at {op:?}"
        );

        let lock = real.lock();
        match op {
            Operation::SetPosition { .. } => assert_eq!(lock.state(), previous),
            Operation::Lock => {
                assert_eq!(lock.state(), LockState::Closed);
                assert_eq!(lock.window().newest(), None);
            },
            Operation::LockAndChangeCombination { .. } if real_result.is_ok() => {
                assert_eq!(lock.state(), LockState::Closed);
                assert_eq!(lock.window().newest(), None);
            },
            Operation::LockAndChangeCombination { .. } => assert_eq!(lock.state(), previous),
            Operation::Open => {
                let state = lock.state();
                if state == LockState::Closed {
                    assert_eq!(lock.window().newest(), None);
                }

                let again = real.lock_mut().open();
                assert_eq!(again, state, "repeated open changed the outcome");
                model.apply(op);
            },
        }
    }
});
