//! Composable supplier predicates.
//!
//! A [`SupplierQuery`] is a conjunction of [`SupplierPredicate`]s. The PostgreSQL
//! store pushes it down into SQL ([`SupplierQuery::push_where`]). Tests evaluate it
//! row by row against the in-memory store; both interpretations must agree.
//!
//! Case-insensitive comparisons use `LOWER` in SQL and Unicode `to_lowercase` in
//! memory. They agree on ASCII and on most letters with a single lowercase form.
//! Characters whose lowering depends on the database locale (e.g. the dotted `İ`,
//! which Rust lowers to `i` plus a combining dot) may compare differently.

use sqlx::{Postgres, QueryBuilder};

#[cfg(test)]
use crate::features::suppliers::models::Supplier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierPredicate {
    /// `code` contains the term, ignoring case
    CodeContains(String),
    /// `code` or `name` contains the term, ignoring case
    CodeOrNameContains(String),
    /// `province` equals the name, ignoring case; null never matches
    ProvinceIs(String),
    /// `city` equals the name, ignoring case; null never matches
    CityIs(String),
    /// `province` equals the name exactly
    ProvinceIsExactly(String),
    /// `city` equals the name exactly
    CityIsExactly(String),
}

#[cfg(test)]
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
fn eq_ignore_case(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase() == expected.to_lowercase())
}

impl SupplierPredicate {
    #[cfg(test)]
    pub fn matches(&self, supplier: &Supplier) -> bool {
        match self {
            Self::CodeContains(term) => contains_ignore_case(&supplier.code, term),
            Self::CodeOrNameContains(term) => {
                contains_ignore_case(&supplier.code, term)
                    || contains_ignore_case(&supplier.name, term)
            }
            Self::ProvinceIs(name) => eq_ignore_case(supplier.province.as_deref(), name),
            Self::CityIs(name) => eq_ignore_case(supplier.city.as_deref(), name),
            Self::ProvinceIsExactly(name) => supplier.province.as_deref() == Some(name.as_str()),
            Self::CityIsExactly(name) => supplier.city.as_deref() == Some(name.as_str()),
        }
    }

    /// Append this predicate as a SQL boolean expression with bound parameters
    fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        // POSITION avoids having to escape LIKE wildcards in user input
        match self {
            Self::CodeContains(term) => {
                builder
                    .push("POSITION(LOWER(")
                    .push_bind(term.clone())
                    .push(") IN LOWER(code)) > 0");
            }
            Self::CodeOrNameContains(term) => {
                builder
                    .push("(POSITION(LOWER(")
                    .push_bind(term.clone())
                    .push(") IN LOWER(code)) > 0 OR POSITION(LOWER(")
                    .push_bind(term.clone())
                    .push(") IN LOWER(name)) > 0)");
            }
            Self::ProvinceIs(name) => {
                builder
                    .push("(province IS NOT NULL AND LOWER(province) = LOWER(")
                    .push_bind(name.clone())
                    .push("))");
            }
            Self::CityIs(name) => {
                builder
                    .push("(city IS NOT NULL AND LOWER(city) = LOWER(")
                    .push_bind(name.clone())
                    .push("))");
            }
            Self::ProvinceIsExactly(name) => {
                builder.push("province = ").push_bind(name.clone());
            }
            Self::CityIsExactly(name) => {
                builder.push("city = ").push_bind(name.clone());
            }
        }
    }
}

/// Conjunction of predicates; an empty query matches every supplier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierQuery {
    predicates: Vec<SupplierPredicate>,
}

impl SupplierQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate (logical AND)
    pub fn and(mut self, predicate: SupplierPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[cfg(test)]
    pub fn matches(&self, supplier: &Supplier) -> bool {
        self.predicates.iter().all(|p| p.matches(supplier))
    }

    /// Append ` WHERE ...` to `builder`; no-op for an empty query
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_sql(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(code: &str, name: &str, province: Option<&str>, city: Option<&str>) -> Supplier {
        Supplier {
            id: 1,
            code: code.to_string(),
            name: name.to_string(),
            province: province.map(str::to_string),
            city: city.map(str::to_string),
            address: None,
            contact_person: None,
            version: 1,
        }
    }

    #[test]
    fn test_code_contains_ignores_case() {
        let s = supplier("abc123", "Acme", None, None);
        assert!(SupplierPredicate::CodeContains("ABC".into()).matches(&s));
        assert!(SupplierPredicate::CodeContains("c12".into()).matches(&s));
        assert!(!SupplierPredicate::CodeContains("acme".into()).matches(&s));
    }

    #[test]
    fn test_code_or_name_contains() {
        let s = supplier("SUP-01", "Acme Trading", None, None);
        assert!(SupplierPredicate::CodeOrNameContains("trading".into()).matches(&s));
        assert!(SupplierPredicate::CodeOrNameContains("sup-".into()).matches(&s));
        assert!(!SupplierPredicate::CodeOrNameContains("globex".into()).matches(&s));
    }

    #[test]
    fn test_location_equality() {
        let s = supplier("S1", "A", Some("West"), None);
        assert!(SupplierPredicate::ProvinceIs("WEST".into()).matches(&s));
        assert!(!SupplierPredicate::ProvinceIsExactly("WEST".into()).matches(&s));
        assert!(SupplierPredicate::ProvinceIsExactly("West".into()).matches(&s));
        // Null city never matches, not even an empty name
        assert!(!SupplierPredicate::CityIs(String::new()).matches(&s));
        assert!(!SupplierPredicate::CityIsExactly("West".into()).matches(&s));
    }

    #[test]
    fn test_query_is_conjunction() {
        let s = supplier("abc1", "Acme", Some("West"), Some("Springfield"));
        let query = SupplierQuery::new()
            .and(SupplierPredicate::CodeContains("ABC".into()))
            .and(SupplierPredicate::CityIs("springfield".into()));
        assert!(query.matches(&s));

        let query = query.and(SupplierPredicate::ProvinceIs("East".into()));
        assert!(!query.matches(&s));
        assert!(SupplierQuery::new().matches(&s));
    }

    #[test]
    fn test_push_where_sql() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM suppliers");
        SupplierQuery::new()
            .and(SupplierPredicate::CodeContains("a".into()))
            .and(SupplierPredicate::ProvinceIsExactly("West".into()))
            .push_where(&mut builder);

        assert_eq!(
            builder.sql(),
            "SELECT * FROM suppliers WHERE POSITION(LOWER($1) IN LOWER(code)) > 0 AND province = $2"
        );
    }

    fn where_sql(predicates: Vec<SupplierPredicate>) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM suppliers");
        predicates
            .into_iter()
            .fold(SupplierQuery::new(), SupplierQuery::and)
            .push_where(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn test_code_or_name_sql_binds_term_twice() {
        assert_eq!(
            where_sql(vec![SupplierPredicate::CodeOrNameContains("a".into())]),
            "SELECT * FROM suppliers WHERE (POSITION(LOWER($1) IN LOWER(code)) > 0 \
             OR POSITION(LOWER($2) IN LOWER(name)) > 0)"
        );
    }

    #[test]
    fn test_province_is_sql_ignores_case_and_skips_null() {
        assert_eq!(
            where_sql(vec![SupplierPredicate::ProvinceIs("West".into())]),
            "SELECT * FROM suppliers WHERE (province IS NOT NULL AND LOWER(province) = LOWER($1))"
        );
    }

    #[test]
    fn test_city_is_sql_ignores_case_and_skips_null() {
        assert_eq!(
            where_sql(vec![SupplierPredicate::CityIs("Springfield".into())]),
            "SELECT * FROM suppliers WHERE (city IS NOT NULL AND LOWER(city) = LOWER($1))"
        );
    }

    #[test]
    fn test_city_is_exactly_sql() {
        assert_eq!(
            where_sql(vec![SupplierPredicate::CityIsExactly("Springfield".into())]),
            "SELECT * FROM suppliers WHERE city = $1"
        );
    }

    #[test]
    fn test_bind_numbering_across_predicates() {
        let sql = where_sql(vec![
            SupplierPredicate::CodeContains("a".into()),
            SupplierPredicate::CodeOrNameContains("b".into()),
            SupplierPredicate::ProvinceIs("West".into()),
            SupplierPredicate::CityIsExactly("Springfield".into()),
        ]);

        assert_eq!(
            sql,
            "SELECT * FROM suppliers \
             WHERE POSITION(LOWER($1) IN LOWER(code)) > 0 \
             AND (POSITION(LOWER($2) IN LOWER(code)) > 0 OR POSITION(LOWER($3) IN LOWER(name)) > 0) \
             AND (province IS NOT NULL AND LOWER(province) = LOWER($4)) \
             AND city = $5"
        );
    }

    #[test]
    fn test_case_folding_beyond_ascii() {
        let s = supplier("ÄRZTE-1", "Ärzte Bedarf", Some("ÖSTERREICH"), None);
        assert!(SupplierPredicate::CodeContains("ärzte".into()).matches(&s));
        assert!(SupplierPredicate::ProvinceIs("österreich".into()).matches(&s));

        // Locale-dependent lowering: Rust yields "i\u{307}stanbul", not "istanbul"
        let s = supplier("İSTANBUL-1", "Bosphorus", None, None);
        assert!(!SupplierPredicate::CodeContains("istanbul".into()).matches(&s));
    }

    #[test]
    fn test_empty_query_adds_no_where() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM suppliers");
        SupplierQuery::new().push_where(&mut builder);
        assert_eq!(builder.sql(), "SELECT * FROM suppliers");
    }
}
