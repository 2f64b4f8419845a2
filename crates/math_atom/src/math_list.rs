//! Ordered lists of atoms

use crate::atom::MathAtom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered, mutable sequence of atoms
///
/// Equality is element-wise and cloning is deep, so a cloned list never
/// shares atoms or child lists with its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MathList {
    atoms: Vec<MathAtom>,
}

impl MathList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn push(&mut self, atom: MathAtom) {
        self.atoms.push(atom);
    }

    /// Insert an atom before `index`; panics if `index > len`
    pub fn insert(&mut self, index: usize, atom: MathAtom) {
        self.atoms.insert(index, atom);
    }

    pub fn remove(&mut self, index: usize) -> MathAtom {
        self.atoms.remove(index)
    }

    pub fn pop(&mut self) -> Option<MathAtom> {
        self.atoms.pop()
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
    }

    pub fn get(&self, index: usize) -> Option<&MathAtom> {
        self.atoms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MathAtom> {
        self.atoms.get_mut(index)
    }

    pub fn first(&self) -> Option<&MathAtom> {
        self.atoms.first()
    }

    pub fn last(&self) -> Option<&MathAtom> {
        self.atoms.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut MathAtom> {
        self.atoms.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MathAtom> {
        self.atoms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MathAtom> {
        self.atoms.iter_mut()
    }

    pub fn as_slice(&self) -> &[MathAtom] {
        &self.atoms
    }

    /// Append clones of every atom in `other`
    pub fn append(&mut self, other: &MathList) {
        self.atoms.extend(other.atoms.iter().cloned());
    }

    /// Visit every atom in this list and in all nested lists, depth first
    ///
    /// Scripts are visited after the atom's own inner lists.
    pub fn walk<F: FnMut(&MathAtom)>(&self, f: &mut F) {
        for atom in &self.atoms {
            f(atom);
            for inner in atom.inner_lists() {
                inner.walk(f);
            }
            atom.superscript().walk(f);
            atom.subscript().walk(f);
        }
    }

    /// Number of atoms in this list and all nested lists
    pub fn deep_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}

impl From<Vec<MathAtom>> for MathList {
    fn from(atoms: Vec<MathAtom>) -> Self {
        Self { atoms }
    }
}

impl From<MathAtom> for MathList {
    fn from(atom: MathAtom) -> Self {
        Self { atoms: vec![atom] }
    }
}

impl FromIterator<MathAtom> for MathList {
    fn from_iter<I: IntoIterator<Item = MathAtom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl Extend<MathAtom> for MathList {
    fn extend<I: IntoIterator<Item = MathAtom>>(&mut self, iter: I) {
        self.atoms.extend(iter);
    }
}

impl IntoIterator for MathList {
    type Item = MathAtom;
    type IntoIter = std::vec::IntoIter<MathAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'a> IntoIterator for &'a MathList {
    type Item = &'a MathAtom;
    type IntoIter = std::slice::Iter<'a, MathAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl Index<usize> for MathList {
    type Output = MathAtom;

    fn index(&self, index: usize) -> &MathAtom {
        &self.atoms[index]
    }
}

impl IndexMut<usize> for MathList {
    fn index_mut(&mut self, index: usize) -> &mut MathAtom {
        &mut self.atoms[index]
    }
}

/// Debug rendering as a LaTeX-like string, e.g. `x^{2}+\sqrt{y}`
impl fmt::Display for MathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}
