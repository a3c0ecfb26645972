use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::model::Expression;
use crate::roll;
use rand::Rng;
use tracing::debug;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, min: i64, max: i64) -> i64 {
        self.generator.gen_range(min..=max)
    }
}

pub const DEFAULT_MAX_TERMS: usize = 64;

/// Grammar knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Only accept `0`-`9` as dice count
    pub single_digit_count: bool,
    /// Longest accepted chain
    pub max_terms: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            single_digit_count: false,
            max_terms: DEFAULT_MAX_TERMS,
        }
    }
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    options: Options,
}

impl Solver {
    pub fn new(input: &str) -> Self {
        Solver {
            query: input.trim().to_lowercase(),
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Parse the query structure without rolling anything
    pub fn parse(&self) -> Result<Option<Expression>> {
        Expression::parse(&self.query, &self.options)
    }

    /// Solve the roll expression using the default Rng source
    pub fn solve(&self) -> Result<Option<roll::Result>> {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<R: Rng>(&self, generator: &mut R) -> Result<Option<roll::Result>> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(
        &self,
        source: &mut S,
    ) -> Result<Option<roll::Result>> {
        Ok(self
            .parse()?
            .map(|expression| self.eval_with_source(expression, source)))
    }

    /// Roll an expression obtained from `parse` using the default Rng source
    pub fn eval(&self, expression: Expression) -> roll::Result {
        self.eval_with_source(
            expression,
            &mut RandomSource {
                generator: &mut rand::thread_rng(),
            },
        )
    }

    /// Roll an expression obtained from `parse` using the provided source
    pub fn eval_with_source<S: roll::Source>(
        &self,
        expression: Expression,
        source: &mut S,
    ) -> roll::Result {
        debug!("solving `{}` as {:?}", self.query, expression);
        match expression {
            Expression::Batch { times, term } => roll::Result::new_batch(
                (0..times)
                    .map(|_| Evaluator::eval(&term.spec, &term.source, roll::Sign::Plus, source))
                    .collect(),
                &self.query,
            ),
            Expression::Chain(links) => roll::Result::new_chain(
                links
                    .iter()
                    .map(|link| Evaluator::eval(&link.term.spec, &link.term.source, link.sign, source))
                    .collect(),
                &self.query,
            ),
        }
    }
}
