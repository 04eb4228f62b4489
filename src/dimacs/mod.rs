/*!
The DIMACS representation of a formula.

A formula is written as:
- Comment lines, each `c ` followed by the comment, in order.
- The problem line `p cnf <atoms> <clauses>`.
- One line for each clause, with literals separated by a single space and terminated by `0`.

For example:

```text
c Random 3-SAT instance
c Variables: 5, Clauses: 2
p cnf 5 2
1 -3 5 0
-2 4 1 0
```

Reading is more permissive than writing, in line with the wider use of DIMACS:
- Comments may appear anywhere, and are kept in order.
- Clauses may span lines, or share a line.
- A line beginning with `%` ends the formula.

Still, reading is strict on the problem line, termination of clauses, bounds on atoms, and the count of clauses.
See [ParseError](crate::types::err::ParseError) for details.
*/

mod read;
mod write;

pub use read::read_dimacs;
pub use write::write_dimacs;
