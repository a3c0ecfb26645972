use crate::dice;
use crate::roll;
use crate::roll::kind;
use tracing::trace;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Roll every die of `spec`, apply its keep clause and tag the outcome with `sign`
    pub(crate) fn eval<S: roll::Source>(
        spec: &dice::Spec,
        text: &str,
        sign: roll::Sign,
        source: &mut S,
    ) -> kind::Outcome {
        let faces = Self::roll(spec.amount, spec.die, source);
        let faces = match spec.keep {
            Some(keep) => keep.apply(faces),
            None => faces,
        };
        let outcome = kind::Outcome::new(faces, spec.modifier, text).with_sign(sign);
        trace!("`{}` as `{}` rolled {}", text, spec, outcome.to_string_history());
        outcome
    }

    pub(crate) fn roll<S: roll::Source>(
        amount: u64,
        die: dice::DieType,
        source: &mut S,
    ) -> Vec<dice::Face> {
        (0..amount)
            .map(|_| dice::Face::new(source.throw(1, die.sides()) - die.offset(), die))
            .collect()
    }
}
