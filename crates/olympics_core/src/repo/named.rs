//! Statement helpers shared by the repositories of named entities.

use crate::repo::{RepoError, RepoResult};
use rusqlite::{Connection, OptionalExtension, Params, Row};

pub(crate) fn query_one<T, P>(
    conn: &Connection,
    sql: &'static str,
    params: P,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Option<T>>
where
    P: Params,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let mut rows = stmt.query(params)?;
    match rows.next()? {
        Some(row) => Ok(Some(parse(row)?)),
        None => Ok(None),
    }
}

pub(crate) fn query_all<T, P>(
    conn: &Connection,
    sql: &'static str,
    params: P,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>>
where
    P: Params,
{
    let mut stmt = conn.prepare_cached(sql)?;
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}

/// Runs a lookup whose first column is the row id.
pub(crate) fn id_by_name(
    conn: &Connection,
    sql: &'static str,
    name: &str,
) -> RepoResult<Option<i64>> {
    let id = conn
        .query_row(sql, [name], |row| row.get::<_, i64>(0))
        .optional()?;
    Ok(id)
}

pub(crate) fn name_by_id(
    conn: &Connection,
    sql: &'static str,
    id: i64,
) -> RepoResult<Option<String>> {
    let name = conn
        .query_row(sql, [id], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(name)
}

pub(crate) fn names(conn: &Connection, sql: &'static str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

/// Executes a write and reports whether it touched any row.
pub(crate) fn execute_changed<P: Params>(
    conn: &Connection,
    sql: &'static str,
    params: P,
) -> RepoResult<bool> {
    let changed = conn.execute(sql, params)?;
    Ok(changed > 0)
}

pub(crate) fn non_negative_u32(table: &str, column: &str, value: i64) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid value `{value}` in {table}.{column}")))
}
