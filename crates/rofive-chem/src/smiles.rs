//! SMILES parser.
//!
//! Covers the subset needed for descriptor work: the organic subset
//! (B C N O P S F Cl Br I and aromatic b c n o p s), bracket atoms with
//! isotope/charge/explicit hydrogens, branches, bond symbols, ring
//! closures (including `%nn`), and dot-separated fragments.
//! Stereo markers (`/`, `\`, `@`) are accepted and ignored.

use std::collections::BTreeMap;

use crate::element;
use crate::error::ChemError;
use crate::molecule::{Atom, Bond, BondOrder, Molecule};
use crate::Result;

/// Parse a SMILES string into a [`Molecule`].
///
/// Fails on anything that does not denote at least one atom, on unknown
/// symbols, and on unbalanced branches or ring closures.
pub fn parse_smiles(input: &str) -> Result<Molecule> {
    let mut parser = Parser::new(input);
    parser.run()?;
    parser.finish()
}

struct Parser<'s> {
    src: &'s [u8],
    at: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Parallel to `atoms`: true when hydrogens were given in brackets
    /// and must not be recomputed.
    bracketed: Vec<bool>,
    branches: Vec<usize>,
    /// Ring-bond bookkeeping: digit -> (opening atom, bond symbol at open)
    open_rings: BTreeMap<u16, (usize, Option<BondOrder>)>,
    prev: Option<usize>,
    pending_bond: Option<BondOrder>,
}

impl<'s> Parser<'s> {
    fn new(input: &'s str) -> Self {
        Parser {
            src: input.as_bytes(),
            at: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            bracketed: Vec::new(),
            branches: Vec::new(),
            open_rings: BTreeMap::new(),
            prev: None,
            pending_bond: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.at).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.at += 1;
        }
        c
    }

    fn fail(&self, msg: impl Into<String>) -> ChemError {
        ChemError::Parse(format!("{} at position {}", msg.into(), self.at))
    }

    fn run(&mut self) -> Result<()> {
        while let Some(c) = self.peek() {
            match c {
                b'(' => {
                    self.bump();
                    match self.prev {
                        Some(p) => self.branches.push(p),
                        None => return Err(self.fail("branch before any atom")),
                    }
                }
                b')' => {
                    self.bump();
                    self.prev = Some(
                        self.branches
                            .pop()
                            .ok_or_else(|| self.fail("unmatched ')'"))?,
                    );
                    self.pending_bond = None;
                }
                b'-' => {
                    self.bump();
                    self.pending_bond = Some(BondOrder::Single);
                }
                b'=' => {
                    self.bump();
                    self.pending_bond = Some(BondOrder::Double);
                }
                b'#' => {
                    self.bump();
                    self.pending_bond = Some(BondOrder::Triple);
                }
                b':' => {
                    self.bump();
                    self.pending_bond = Some(BondOrder::Aromatic);
                }
                // Cis/trans markers carry no graph information we use
                b'/' | b'\\' => {
                    self.bump();
                }
                b'.' => {
                    self.bump();
                    self.prev = None;
                    self.pending_bond = None;
                }
                b'%' => {
                    self.bump();
                    let n = self.two_digit_ring()?;
                    self.ring_closure(n)?;
                }
                b'0'..=b'9' => {
                    self.bump();
                    self.ring_closure((c - b'0') as u16)?;
                }
                b'[' => self.bracket_atom()?,
                _ if organic_start(c) => self.organic_atom()?,
                _ => {
                    return Err(self.fail(format!("unexpected character '{}'", c as char)));
                }
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<()> {
        let first = self.bump().expect("caller checked");
        let aromatic = first.is_ascii_lowercase();
        let upper = first.to_ascii_uppercase();

        // Two-letter organic-subset symbols: Cl and Br only
        let symbol = match (upper, self.peek()) {
            (b'C', Some(b'l')) if !aromatic => {
                self.bump();
                "Cl".to_string()
            }
            (b'B', Some(b'r')) if !aromatic => {
                self.bump();
                "Br".to_string()
            }
            _ => (upper as char).to_string(),
        };

        if aromatic && !matches!(upper, b'B' | b'C' | b'N' | b'O' | b'P' | b'S') {
            return Err(self.fail(format!("'{}' cannot be aromatic", first as char)));
        }

        let elem = element::by_symbol(&symbol)
            .ok_or_else(|| ChemError::UnknownElement(symbol.clone()))?;

        self.push_atom(
            Atom {
                number: elem.number,
                charge: 0,
                isotope: None,
                aromatic,
                implicit_h: 0, // assigned in finish()
            },
            false,
        )
    }

    fn bracket_atom(&mut self) -> Result<()> {
        self.bump(); // '['

        let isotope = self.digits().map(|n| n as u16);

        let first = self
            .bump()
            .ok_or_else(|| self.fail("truncated bracket atom"))?;
        if !first.is_ascii_alphabetic() {
            return Err(self.fail("expected element symbol in brackets"));
        }
        let aromatic = first.is_ascii_lowercase();

        // Greedy two-letter match against the element table; 'H' never
        // starts a two-letter symbol here because explicit-H counts follow.
        let mut symbol = ((first.to_ascii_uppercase()) as char).to_string();
        if let Some(next) = self.peek() {
            if next.is_ascii_lowercase() {
                let mut two = symbol.clone();
                two.push(next as char);
                if element::by_symbol(&two).is_some() {
                    self.bump();
                    symbol = two;
                }
            }
        }
        let elem = element::by_symbol(&symbol)
            .ok_or_else(|| ChemError::UnknownElement(symbol.clone()))?;

        // Chirality markers: parsed past, not recorded
        while self.peek() == Some(b'@') {
            self.bump();
        }

        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.bump();
            hydrogens = match self.digits() {
                Some(n) if n <= 9 => n as u8,
                Some(_) => return Err(self.fail("implausible hydrogen count")),
                None => 1,
            };
        }

        let charge = self.charge()?;

        if self.bump() != Some(b']') {
            return Err(self.fail("expected ']'"));
        }

        self.push_atom(
            Atom {
                number: elem.number,
                charge,
                isotope,
                aromatic,
                implicit_h: hydrogens,
            },
            true,
        )
    }

    fn charge(&mut self) -> Result<i8> {
        let sign: i8 = match self.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Ok(0),
        };
        self.bump();
        if let Some(n) = self.digits() {
            if n > 9 {
                return Err(self.fail("implausible charge"));
            }
            return Ok(sign * n as i8);
        }
        // Repeated signs: [O--], [Fe+++]
        let mut magnitude = 1i8;
        while self.peek() == Some(if sign > 0 { b'+' } else { b'-' }) {
            self.bump();
            magnitude += 1;
        }
        Ok(sign * magnitude)
    }

    fn digits(&mut self) -> Option<u32> {
        let mut value: u32 = 0;
        let mut seen = false;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
            value = value.saturating_mul(10) + (c - b'0') as u32;
            seen = true;
        }
        seen.then_some(value)
    }

    fn two_digit_ring(&mut self) -> Result<u16> {
        let hi = self.bump().filter(u8::is_ascii_digit);
        let lo = self.bump().filter(u8::is_ascii_digit);
        match (hi, lo) {
            (Some(h), Some(l)) => Ok((h - b'0') as u16 * 10 + (l - b'0') as u16),
            _ => Err(self.fail("'%' needs two digits")),
        }
    }

    fn ring_closure(&mut self, label: u16) -> Result<()> {
        let here = self
            .prev
            .ok_or_else(|| self.fail("ring closure before any atom"))?;

        match self.open_rings.remove(&label) {
            None => {
                self.open_rings
                    .insert(label, (here, self.pending_bond.take()));
            }
            Some((there, opening_bond)) => {
                if there == here {
                    return Err(self.fail(format!("ring bond {label} closes on itself")));
                }
                let both_aromatic = self.atoms[there].aromatic && self.atoms[here].aromatic;
                let order = self
                    .pending_bond
                    .take()
                    .or(opening_bond)
                    .unwrap_or(if both_aromatic {
                        BondOrder::Aromatic
                    } else {
                        BondOrder::Single
                    });
                self.bonds.push(Bond { a: there, b: here, order });
            }
        }
        Ok(())
    }

    fn push_atom(&mut self, atom: Atom, bracketed: bool) -> Result<()> {
        let idx = self.atoms.len();
        self.atoms.push(atom);
        self.bracketed.push(bracketed);

        if let Some(prev) = self.prev {
            let both_aromatic = self.atoms[prev].aromatic && self.atoms[idx].aromatic;
            let order = self.pending_bond.take().unwrap_or(if both_aromatic {
                BondOrder::Aromatic
            } else {
                BondOrder::Single
            });
            self.bonds.push(Bond { a: prev, b: idx, order });
        }
        self.pending_bond = None;
        self.prev = Some(idx);
        Ok(())
    }

    fn finish(mut self) -> Result<Molecule> {
        if self.atoms.is_empty() {
            return Err(ChemError::Parse("no atoms in input".into()));
        }
        if !self.branches.is_empty() {
            return Err(ChemError::Parse(format!(
                "{} unclosed '('",
                self.branches.len()
            )));
        }
        if !self.open_rings.is_empty() {
            let labels: Vec<u16> = self.open_rings.keys().copied().collect();
            return Err(ChemError::Parse(format!(
                "unmatched ring closure(s) {labels:?}"
            )));
        }

        self.assign_implicit_hydrogens();
        Ok(Molecule::new(self.atoms, self.bonds))
    }

    /// Fill in implicit hydrogens on organic-subset atoms from standard
    /// valences. Bracket atoms keep exactly the hydrogens they declared.
    fn assign_implicit_hydrogens(&mut self) {
        for i in 0..self.atoms.len() {
            if self.bracketed[i] {
                continue;
            }
            let used: usize = self
                .bonds
                .iter()
                .filter(|b| b.a == i || b.b == i)
                .map(|b| b.order.sigma())
                .sum();
            let Some(valence) = default_valence(self.atoms[i].number, used) else {
                continue;
            };
            // One valence goes into the aromatic pi system
            let capacity = if self.atoms[i].aromatic {
                valence.saturating_sub(1)
            } else {
                valence
            };
            self.atoms[i].implicit_h = capacity.saturating_sub(used) as u8;
        }
    }
}

fn organic_start(c: u8) -> bool {
    matches!(
        c,
        b'B' | b'C' | b'N' | b'O' | b'P' | b'S' | b'F' | b'I'
            | b'b' | b'c' | b'n' | b'o' | b'p' | b's'
    )
}

/// Smallest standard valence that accommodates `used` bonds.
fn default_valence(number: u8, used: usize) -> Option<usize> {
    let alternatives: &[usize] = match number {
        5 => &[3],
        6 => &[4],
        7 => &[3, 5],
        8 => &[2],
        15 => &[3, 5],
        16 => &[2, 4, 6],
        9 | 17 | 35 | 53 => &[1],
        _ => return None,
    };
    alternatives
        .iter()
        .copied()
        .find(|&v| v >= used)
        .or_else(|| alternatives.last().copied())
}
