use crate::error;
use crate::error::Error;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::str::FromStr;

/// Pest parser
#[derive(Parser)]
#[grammar = "fudge.pest"]
pub struct Parser;

impl Parser {
    /// Parse the `number` nested in `pair`, or `pair` itself when it is one
    pub fn extract_value<T: FromStr>(pair: Pair<Rule>) -> error::Result<T> {
        let number = match pair.as_rule() {
            Rule::number => pair,
            _ => pair
                .into_inner()
                .find(|inner| inner.as_rule() == Rule::number)
                .ok_or_else(|| Error::InvalidSpec("missing numeric field".to_owned()))?,
        };
        number
            .as_str()
            .parse::<T>()
            .map_err(|_| Error::InvalidSpec(format!("`{}` is out of range", number.as_str())))
    }
}
