use crate::dice;
use crate::roll::Sign;
use itertools::Itertools;
use std::ops::Deref;

/// Represents one evaluated dice term
#[derive(Debug, Clone)]
pub struct Outcome {
    faces: Vec<dice::Face>,
    sum: i64,
    modifier: Option<i64>,
    source: String,
    sign: Sign,
}

impl Outcome {
    pub fn new(faces: Vec<dice::Face>, modifier: Option<i64>, source: &str) -> Self {
        let sum = faces.iter().filter(|face| face.kept).map(|face| face.value).sum();
        Outcome {
            faces,
            sum,
            modifier,
            source: source.to_owned(),
            sign: Sign::Plus,
        }
    }

    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = sign;
        self
    }

    /// Every face rolled, dropped ones included
    pub fn get_faces(&self) -> &[dice::Face] {
        &self.faces
    }

    pub fn get_rolls(&self) -> Vec<i64> {
        self.faces.iter().map(|face| face.value).collect()
    }

    pub fn get_kept(&self) -> Vec<i64> {
        self.faces
            .iter()
            .filter(|face| face.kept)
            .map(|face| face.value)
            .collect()
    }

    /// Sum of the kept faces, without the static modifier
    pub fn get_sum(&self) -> i64 {
        self.sum
    }

    pub fn get_modifier(&self) -> Option<i64> {
        self.modifier
    }

    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_sign(&self) -> Sign {
        self.sign
    }

    /// Sum of the kept faces plus the static modifier
    pub fn get_total(&self) -> i64 {
        self.sum.saturating_add(self.modifier.unwrap_or(0))
    }

    /// Total with the chain sign applied
    pub fn get_signed_total(&self) -> i64 {
        self.sign.apply(self.get_total())
    }

    /// Stringify the faces and modifier, e.g. `[3, ~~-2~~] + 1`
    pub fn to_string_history(&self) -> String {
        let mut s = format!("[{}]", self.faces.iter().format(", "));
        match self.modifier {
            Some(m) if m < 0 => s.push_str(&format!(" - {}", m.unsigned_abs())),
            Some(m) => s.push_str(&format!(" + {m}")),
            None => (),
        }
        s
    }

    /// Stringify self as a standalone roll
    pub fn to_string_single(&self) -> String {
        format!(
            "`{}` `{}` = **{}**",
            self.source,
            self.to_string_history(),
            self.get_total()
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_single())
    }
}

/// Represents independent repetitions of one dice term
#[derive(Debug, Clone)]
pub struct Batch {
    pub outcomes: Vec<Outcome>,
}

impl Deref for Batch {
    type Target = Vec<Outcome>;

    fn deref(&self) -> &Self::Target {
        &self.outcomes
    }
}

/// Represents dice terms joined by `+`/`-` into one total
#[derive(Debug, Clone)]
pub struct Chain {
    pub outcomes: Vec<Outcome>,
}

impl Chain {
    pub fn get_total(&self) -> i64 {
        self.outcomes
            .iter()
            .fold(0i64, |acc, outcome| acc.saturating_add(outcome.get_signed_total()))
    }

    /// Stringify each term with its sign, e.g. `[1, 4] - ([-3] - 1)`
    pub fn to_string_history(&self) -> String {
        self.outcomes
            .iter()
            .enumerate()
            .fold(String::new(), |mut s, (index, outcome)| {
                match (index, outcome.get_sign()) {
                    (0, Sign::Plus) => (),
                    (0, Sign::Minus) => s.push('-'),
                    (_, sign) => s.push_str(&format!(" {} ", sign.as_str())),
                };
                if self.outcomes.len() > 1 && outcome.get_modifier().is_some() {
                    s.push_str(&format!("({})", outcome.to_string_history()));
                } else {
                    s.push_str(&outcome.to_string_history());
                }
                s
            })
    }
}

impl Deref for Chain {
    type Target = Vec<Outcome>;

    fn deref(&self) -> &Self::Target {
        &self.outcomes
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` = **{}**", self.to_string_history(), self.get_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DieType;
    use crate::dice::Keep;

    fn outcome(values: &[i64], modifier: Option<i64>, source: &str) -> Outcome {
        let faces = values.iter().map(|&v| dice::Face::new(v, DieType::F)).collect();
        Outcome::new(faces, modifier, source)
    }

    #[test]
    fn outcome_total_includes_modifier() {
        let o = outcome(&[3, -2], Some(4), "2f+4");
        assert_eq!(1, o.get_sum());
        assert_eq!(5, o.get_total());
        assert_eq!("[3, -2] + 4", o.to_string_history());
    }

    #[test]
    fn dropped_faces_do_not_count() {
        let faces = [5, -1, 2]
            .iter()
            .map(|&v| dice::Face::new(v, DieType::F))
            .collect();
        let o = Outcome::new(Keep::Low(1).apply(faces), None, "3fkl1");
        assert_eq!(-1, o.get_sum());
        assert_eq!(vec![-1, 2, 5], o.get_rolls());
        assert_eq!("[-1, ~~2~~, ~~5~~]", o.to_string_history());
    }

    #[test]
    fn chain_total_and_history() {
        let chain = Chain {
            outcomes: vec![
                outcome(&[1, 4], None, "2f"),
                outcome(&[-3], Some(-1), "1f-1").with_sign(Sign::Minus),
            ],
        };
        assert_eq!(9, chain.get_total());
        assert_eq!("[1, 4] - ([-3] - 1)", chain.to_string_history());
    }
}
