/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that 1 ≤ *u* ≤ *n*, where *n* is the count of atoms in a context.
This is the same as the DIMACS representation of a variable, and so no map between internal and external atoms is needed.

```rust
# use marten_sat::structures::atom::Atom;
let n = 97;
let atoms = (1..=n).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```

The atom `0` is never used.
In turn, structures indexed by atoms are one element larger than the count of atoms, with the zero index ignored.

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by the DIMACS representation of a literal as a signed integer.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
