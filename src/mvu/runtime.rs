use std::collections::VecDeque;

use crate::mvu::calculator::{run_effect, update, CalculatorModel, Deps, Msg};

/// Drives the calculator model through `init_msgs`, draining the effects
/// each message produces before moving to the next. Fetch failures are
/// absorbed by `update`, so the loop itself cannot fail.
pub async fn run_calculator(model: &mut CalculatorModel, init_msgs: Vec<Msg>, deps: Deps<'_>) {
    for msg in init_msgs {
        let mut effects: VecDeque<_> = update(model, msg).into();
        while let Some(effect) = effects.pop_front() {
            let msg = run_effect(effect, model, deps).await;
            effects.extend(update(model, msg));
        }
    }
}
