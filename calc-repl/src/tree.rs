//! Draws an expression as a tree, with each operator centered above its operands:
//!
//! ```text
//!    +
//!  ┌─┴┐
//!  *  c
//! ┌┴┐
//! a b
//! ```
//!
//! The positions come from the layout metrics of [`Expr`].

use calc_engine::Expr;

/// The rows of characters being drawn.
#[derive(Default)]
struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Writes `text` into the given row, starting at `column`.
    fn put(&mut self, row: usize, column: usize, text: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }

        let line = &mut self.rows[row];
        for (i, c) in text.chars().enumerate() {
            let at = column + i;
            if line.len() <= at {
                line.resize(at + 1, ' ');
            }
            line[at] = c;
        }
    }

    /// Writes a label so that its middle character lands on `center`.
    fn put_centered(&mut self, row: usize, center: usize, label: &str) {
        let half = label.chars().count() / 2;
        self.put(row, center.saturating_sub(half), label);
    }

    /// Draws `┌──┴──┐` from `start` to `end`, with the `┴` at `middle`.
    fn put_branch(&mut self, row: usize, start: usize, middle: usize, end: usize) {
        let mut branch = String::from("┌");
        branch.extend(std::iter::repeat('─').take(middle.saturating_sub(start + 1)));
        branch.push('┴');
        branch.extend(std::iter::repeat('─').take(end.saturating_sub(middle + 1)));
        branch.push('┐');
        self.put(row, start, &branch);
    }

    fn into_string(self) -> String {
        self.rows
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn draw(canvas: &mut Canvas, expr: &Expr, row: usize, center: usize) {
    match expr {
        Expr::Const(_) | Expr::Var(_) => canvas.put_centered(row, center, &expr.label()),
        Expr::Binary(_, left, right) => {
            canvas.put_centered(row, center, &expr.label());

            let left_center = center.saturating_sub(left.right_width() + 1);
            let right_center = center + right.left_width() + 1;
            canvas.put_branch(row + 1, left_center, center, right_center);

            draw(canvas, left, row + 2, left_center);
            draw(canvas, right, row + 2, right_center);
        },
        Expr::Neg(operand) | Expr::Func(_, operand) => {
            canvas.put_centered(row, center, &expr.label());
            canvas.put(row + 1, center, "│");
            draw(canvas, operand, row + 2, center);
        },
    }
}

/// Draws the expression as a tree, one line per row.
pub fn render(expr: &Expr) -> String {
    let mut canvas = Canvas::default();
    draw(&mut canvas, expr, 0, expr.left_width());
    canvas.into_string()
}
