//! The canonical cross-table query descriptor.

use crate::predicate::{Operand, Operator, Predicate};
use serde::Deserialize;
use tessera_core::{Error, Fields, Result, Value};

/// A logical operation against one or more tables.
///
/// Keys of `values` and `field`s of `where_` may be qualified (`table.field`)
/// or bare. Bare entries apply to every table in `tables`. `values` and
/// `where_` are optional: an absent part lets each table apply its own default,
/// which differs from an explicitly empty one.
#[derive(Clone, Debug, Default)]
pub struct QueryDescriptor {
    /// Verb alias, resolved at dispatch time.
    pub verb: String,
    pub tables: Vec<String>,
    pub values: Option<Fields>,
    pub where_: Option<Vec<Predicate>>,
    /// Accepted and carried, never interpreted.
    pub collate: Fields,
}

impl QueryDescriptor {
    pub fn new<I, S>(verb: impl Into<String>, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verb: verb.into(),
            tables: tables.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_values(mut self, values: Fields) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_where(mut self, predicates: Vec<Predicate>) -> Self {
        self.where_ = Some(predicates);
        self
    }

    /// Parses the JSON wire form:
    /// `{"type", "tables", "values", "where": [{"operator", "value", "operand"}], "collate"}`.
    ///
    /// `fn` predicates have no JSON form and are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDescriptor = serde_json::from_str(json)?;
        let where_ = match raw.where_ {
            Some(list) => Some(
                list.into_iter()
                    .map(RawPredicate::into_predicate)
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        Ok(Self {
            verb: raw.verb,
            tables: raw.tables,
            values: raw.values,
            where_,
            collate: raw.collate,
        })
    }
}

/// The slice of a `QueryDescriptor` that applies to a single table.
///
/// Field names are bare. `None` parts fall back to the table's defaults.
#[derive(Clone, Debug, Default)]
pub struct SubQuery {
    pub values: Option<Fields>,
    pub where_: Option<Vec<Predicate>>,
}

impl SubQuery {
    pub fn new(values: Option<Fields>, where_: Option<Vec<Predicate>>) -> Self {
        Self { values, where_ }
    }

    /// A sub-query carrying only values.
    pub fn values(values: Fields) -> Self {
        Self::new(Some(values), None)
    }

    /// A sub-query carrying only predicates.
    pub fn filter(where_: Vec<Predicate>) -> Self {
        Self::new(None, Some(where_))
    }
}

#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "type")]
    verb: String,
    #[serde(default)]
    tables: Vec<String>,
    #[serde(default)]
    values: Option<Fields>,
    #[serde(default, rename = "where")]
    where_: Option<Vec<RawPredicate>>,
    #[serde(default)]
    collate: Fields,
}

#[derive(Deserialize)]
struct RawPredicate {
    operator: String,
    #[serde(alias = "value")]
    field: String,
    #[serde(default)]
    operand: Value,
}

impl RawPredicate {
    fn into_predicate(self) -> Result<Predicate> {
        match self.operator.parse::<Operator>()? {
            Operator::Fn => Err(Error::invalid_operator(self.operator)),
            op => Ok(Predicate::new(op, self.field, Operand::Value(self.operand))),
        }
    }
}
