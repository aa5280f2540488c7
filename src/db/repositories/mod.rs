pub mod book;
pub mod character;
pub mod seed;
pub mod series;

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};

/// Case-insensitive equality, folded by the database on both sides.
pub(crate) fn name_equals<C: IntoColumnRef>(col: C, name: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).eq(Func::lower(Expr::val(name.trim())))
}

/// Literal substring match. `%`, `_` and `\` in `text` carry no pattern meaning.
pub(crate) fn contains_text<C: IntoColumnRef>(col: C, text: &str) -> SimpleExpr {
    Expr::col(col).like(LikeExpr::new(format!("%{}%", escape_like(text))).escape('\\'))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("Vimes"), "Vimes");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("C:\\"), "C:\\\\");
    }
}
