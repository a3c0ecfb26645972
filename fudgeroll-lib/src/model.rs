use crate::dice;
use crate::error::Error;
use crate::error::Result;
use crate::parser::Parser;
use crate::parser::Rule;
use crate::roll::Sign;
use crate::solver::Options;
use pest::iterators::Pair;
use pest::Parser as _;
use tracing::trace;

pub(crate) mod limits {
    /// Arbitrary limits to avoid oom
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
    pub(crate) const MAX_REPEAT: u64 = 100;
}

/// One dice term matched at the start of some input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Count of the `N#` prefix
    pub repeat: Option<u64>,
    pub spec: dice::Spec,
    /// Matched text without the repeat prefix
    pub source: String,
    /// Length of the whole match, repeat prefix included
    pub len: usize,
}

impl Term {
    /// Match a term at the start of `input`, `None` if `input` does not start with one
    pub fn matching(input: &str, options: &Options) -> Result<Option<Self>> {
        match Parser::parse(Rule::term, input) {
            Ok(mut pairs) => match pairs.next() {
                Some(term) => Self::build(input, term, options),
                None => Ok(None),
            },
            Err(_) => Ok(None),
        }
    }

    fn build(input: &str, term: Pair<Rule>, options: &Options) -> Result<Option<Self>> {
        let span = term.as_span();
        let mut start = span.start();
        let mut repeat = None;
        let mut amount = None;
        let mut die = None;
        let mut keep = None;
        let mut modifier = None;
        for pair in term.into_inner() {
            match pair.as_rule() {
                Rule::repeat => repeat = Some(Parser::extract_value::<u64>(pair)?),
                Rule::amount => {
                    if options.single_digit_count && pair.as_str().len() > 1 {
                        trace!("multi-digit dice count `{}` refused", pair.as_str());
                        return Ok(None);
                    }
                    start = pair.as_span().start();
                    amount = Some(Parser::extract_value::<u64>(pair)?);
                }
                Rule::die => die = Some(dice::DieType::try_from(pair.as_str())?),
                Rule::keep_hi => keep = Some(dice::Keep::High(Parser::extract_value(pair)?)),
                Rule::keep_lo => keep = Some(dice::Keep::Low(Parser::extract_value(pair)?)),
                Rule::modifier => modifier = Some(Self::build_modifier(pair)?),
                _ => (),
            }
        }
        let amount = amount.ok_or_else(|| Error::InvalidSpec("missing dice count".to_owned()))?;
        let die = die.ok_or_else(|| Error::InvalidSpec("missing dice type".to_owned()))?;
        Self::validate(amount, repeat, keep)?;
        Ok(Some(Term {
            repeat,
            spec: dice::Spec {
                amount,
                die,
                keep,
                modifier,
            },
            source: input[start..span.end()].to_owned(),
            len: span.end() - span.start(),
        }))
    }

    fn build_modifier(pair: Pair<Rule>) -> Result<i64> {
        let negative = pair
            .clone()
            .into_inner()
            .any(|inner| inner.as_rule() == Rule::minus);
        let value = Parser::extract_value::<i64>(pair)?;
        Ok(if negative { -value } else { value })
    }

    fn validate(amount: u64, repeat: Option<u64>, keep: Option<dice::Keep>) -> Result<()> {
        if amount == 0 {
            return Err(Error::InvalidSpec("can't roll zero dice".to_owned()));
        }
        if amount > limits::MAX_DICE_AMOUNT {
            return Err(Error::InvalidSpec(format!(
                "exceeded max allowed amount of dice `{}`",
                limits::MAX_DICE_AMOUNT
            )));
        }
        match repeat {
            Some(0) => return Err(Error::InvalidSpec("can't repeat zero times".to_owned())),
            Some(n) if n > limits::MAX_REPEAT => {
                return Err(Error::InvalidSpec(format!(
                    "exceeded max allowed repetitions `{}`",
                    limits::MAX_REPEAT
                )))
            }
            _ => (),
        }
        if let Some(keep) = keep {
            if keep.count() == 0 {
                return Err(Error::InvalidSpec("can't keep zero dice".to_owned()));
            }
            if keep.count() as u64 > amount {
                return Err(Error::InvalidSpec(format!(
                    "can't keep {} out of {} dice",
                    keep.count(),
                    amount
                )));
            }
        }
        Ok(())
    }
}

/// One term of a chain with the sign it is combined with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub sign: Sign,
    pub term: Term,
}

/// Structure of a whole token, before any die is rolled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `N#term`, rolled `times` times and reported separately
    Batch { times: u64, term: Term },
    /// `term (+|- term)*`, combined into one total
    Chain(Vec<Link>),
}

impl Expression {
    /// Number of dice rolling this expression throws
    pub fn faces(&self) -> u64 {
        match self {
            Expression::Batch { times, term } => times.saturating_mul(term.spec.amount),
            Expression::Chain(links) => links
                .iter()
                .fold(0u64, |acc, link| acc.saturating_add(link.term.spec.amount)),
        }
    }

    /// Parse a lowercase token, `None` if it is not a dice expression
    pub fn parse(token: &str, options: &Options) -> Result<Option<Self>> {
        let first = match Term::matching(token, options)? {
            Some(term) => term,
            None => return Ok(None),
        };
        if let Some(times) = first.repeat {
            if first.len != token.len() {
                return Err(Error::malformed(token, "a repeated roll can't be chained"));
            }
            return Ok(Some(Expression::Batch { times, term: first }));
        }
        let mut pos = first.len;
        let mut links = vec![Link {
            sign: Sign::Plus,
            term: first,
        }];
        while pos < token.len() {
            let sign = match token[pos..].chars().next() {
                Some('+') => Sign::Plus,
                Some('-') => Sign::Minus,
                _ => {
                    trace!("`{}` has trailing text at {}", token, pos);
                    return Ok(None);
                }
            };
            if links.len() >= options.max_terms {
                return Err(Error::malformed(token, "too many chained terms"));
            }
            pos += 1;
            let term = match Term::matching(&token[pos..], options)? {
                Some(term) if term.repeat.is_some() => {
                    return Err(Error::malformed(token, "a repeated roll can't be chained"))
                }
                Some(term) => term,
                None => return Err(Error::malformed(token, "expected dice after the sign")),
            };
            pos += term.len;
            links.push(Link { sign, term });
        }
        Ok(Some(Expression::Chain(links)))
    }
}
