/*!
Generators of formulas.

- [ksat] generates random formulas, where each clause has exactly *k* literals over distinct atoms.
  Generation requires a source of randomness, and the same source (with the same seed) always gives the same formula.
- [php] generates pigeonhole formulas, which are unsatisfiable by construction and require no randomness.

Each generator is built from parameters given as (signed) integers, so that every violation of a constraint is found when building the generator, and before any formula is generated.
*/

pub mod ksat;
pub mod php;
