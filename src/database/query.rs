use rusqlite::{Connection, Row, types::Value};

/// One WHERE fragment with its bound parameters. Values are always bound,
/// never interpolated into the SQL text.
pub(crate) struct Clause {
    sql: String,
    params: Vec<Value>,
}

impl Clause {
    pub(crate) fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self {
            sql: format!("{column} = ?"),
            params: vec![value.into()],
        }
    }

    pub(crate) fn like(column: &str, pattern: impl Into<Value>) -> Self {
        Self {
            sql: format!("{column} LIKE ?"),
            params: vec![pattern.into()],
        }
    }

    pub(crate) fn like_nocase(column: &str, pattern: impl Into<Value>) -> Self {
        Self {
            sql: format!("{column} LIKE ? COLLATE NOCASE"),
            params: vec![pattern.into()],
        }
    }

    /// A hand-written SQL expression with its parameters.
    pub(crate) fn expr(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// OR-join the clauses into one parenthesized unit.
    pub(crate) fn any(clauses: Vec<Clause>) -> Self {
        let sql = format!(
            "({})",
            clauses
                .iter()
                .map(|c| c.sql.as_str())
                .collect::<Vec<_>>()
                .join(" OR ")
        );
        let params = clauses.into_iter().flat_map(|c| c.params).collect();
        Self { sql, params }
    }
}

/// A `SELECT *` statement built from AND-joined clauses.
pub(crate) struct Select {
    table: &'static str,
    clauses: Vec<Clause>,
    order_by: Option<&'static str>,
    limit: Option<usize>,
}

impl Select {
    pub(crate) fn new(table: &'static str) -> Self {
        Self {
            table,
            clauses: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    pub(crate) fn filter(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub(crate) fn order_by(mut self, order: &'static str) -> Self {
        self.order_by = Some(order);
        self
    }

    pub(crate) fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn sql(&self) -> String {
        let mut sql = format!("SELECT * FROM {}", self.table);
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(
                &self
                    .clauses
                    .iter()
                    .map(|c| c.sql.as_str())
                    .collect::<Vec<_>>()
                    .join(" AND "),
            );
        }
        if let Some(order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        if self.limit.is_some() {
            sql.push_str(" LIMIT ?");
        }
        sql
    }

    fn params(&self) -> Vec<Value> {
        let mut params: Vec<Value> = self
            .clauses
            .iter()
            .flat_map(|c| c.params.iter().cloned())
            .collect();
        if let Some(limit) = self.limit {
            params.push(Value::from(limit as i64));
        }
        params
    }

    pub(crate) fn query<T>(
        &self,
        conn: &Connection,
        from_row: impl Fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> rusqlite::Result<Vec<T>> {
        let mut stmt = conn.prepare(&self.sql())?;
        let rows = stmt.query_map(rusqlite::params_from_iter(self.params()), |row| {
            from_row(row)
        })?;
        rows.collect()
    }
}
