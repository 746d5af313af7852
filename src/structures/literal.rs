//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! ```rust
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&CLiteral::new(79, !false)).is_eq());
//! ```
//!
//! In other solvers an integer is often used, with the sign of the integer indicating the value of the literal.
//! Here, the integer representation is used only when reading or writing a formula, via [from_dimacs](CLiteral::from_dimacs) and [as_int](Literal::as_int).

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's 'canonical' form of an atom paired with a boolean.
    fn canonical(&self) -> CLiteral;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl CLiteral {
    /// The literal represented by a (non-zero) DIMACS integer, if the integer is non-zero and within bounds.
    ///
    /// ```rust
    /// # use marten_sat::structures::literal::{CLiteral, Literal};
    /// assert_eq!(CLiteral::from_dimacs(-3), Some(CLiteral::new(3, false)));
    /// assert_eq!(CLiteral::from_dimacs(0), None);
    /// ```
    pub fn from_dimacs(int: isize) -> Option<Self> {
        match int {
            0 => None,
            _ => {
                let atom = Atom::try_from(int.unsigned_abs()).ok()?;
                if atom > crate::structures::atom::ATOM_MAX {
                    return None;
                }
                Some(Self::new(atom, int.is_positive()))
            }
        }
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Literals are ordered by atom and then polarity, with false less than true.
impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn dimacs_bounds() {
        assert_eq!(CLiteral::from_dimacs(7), Some(CLiteral::new(7, true)));
        assert_eq!(CLiteral::from_dimacs(-7).map(|l| l.as_int()), Some(-7));
        assert_eq!(CLiteral::from_dimacs(0), None);
        assert_eq!(CLiteral::from_dimacs(isize::MAX), None);
    }

    #[test]
    fn order() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
        ];
        literals.sort();
        assert_eq!(
            literals.iter().map(|l| l.as_int()).collect::<Vec<_>>(),
            vec![1, -2, 2]
        );
    }

    #[test]
    fn negation() {
        let p = CLiteral::new(5, true);
        assert_eq!(-p, p.negate());
        assert_eq!(-(-p), p);
        assert_eq!(format!("{}", -p), "-5");
    }
}
