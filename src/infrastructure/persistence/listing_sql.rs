//! SQL fragments shared by the listing queries of every repository.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::listing::{SearchFilter, Sort, SortDirection};

/// Appends a `WHERE field ILIKE '%pattern%'` clause.
///
/// The field name comes from the listing whitelist, never from raw request
/// input; only the pattern is bound as a parameter. Non-text columns are
/// cast so they can be substring-matched too.
pub(crate) fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&SearchFilter>) {
    if let Some(filter) = filter {
        builder.push(" WHERE ");
        builder.push(filter.field);
        builder.push("::text ILIKE ");
        builder.push_bind(format!("%{}%", escape_like(&filter.pattern)));
    }
}

/// Appends an `ORDER BY` clause for a resolved sort.
///
/// `price` is stored as text and compares numerically through a cast; the
/// id tiebreaker keeps pagination stable for equal keys.
pub(crate) fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, sort: &Sort) {
    builder.push(" ORDER BY ");

    if sort.field == "price" {
        builder.push("price::numeric");
    } else {
        builder.push(sort.field);
    }

    match sort.direction {
        SortDirection::Ascending => builder.push(" ASC"),
        SortDirection::Descending => builder.push(" DESC"),
    };

    builder.push(", id ASC");
}

/// Escapes `LIKE` metacharacters so patterns match literally.
fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
