//! Request extractors and the per-request database session.
//!
//! [`DbConn`] is checked out inside the handler body, after every extractor
//! (including the request body) has resolved, so a slow upload never pins a
//! pooled connection. It goes back to the pool when dropped, whether the
//! handler succeeds or fails. The `Valid*` wrappers behave like their axum
//! counterparts but reject with [`AppError`], so malformed input is reported
//! as 422 with a `detail` body.

use std::ops::{Deref, DerefMut};

use axum::extract::{FromRequest, FromRequestParts};
use heroes_core::Error;
use heroes_db::pool::PooledConnection;
use rusqlite::{Connection, Transaction};

use crate::context::AppContext;
use crate::error::AppError;

/// One pooled SQLite connection, scoped to a single request.
pub struct DbConn(pub PooledConnection);

impl DbConn {
    /// Check a connection out of the context's pool.
    pub fn acquire(ctx: &AppContext) -> heroes_core::Result<Self> {
        heroes_db::pool::get_conn(&ctx.db).map(Self)
    }

    /// Begin a transaction; dropping it without `commit` rolls back.
    pub fn begin(&mut self) -> heroes_core::Result<Transaction<'_>> {
        self.0
            .transaction()
            .map_err(|e| Error::database(e.to_string()))
    }
}

impl Deref for DbConn {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.0
    }
}

/// Commit a transaction opened with [`DbConn::begin`].
pub fn commit(tx: Transaction<'_>) -> heroes_core::Result<()> {
    tx.commit().map_err(|e| Error::database(e.to_string()))
}

/// JSON body extractor that rejects with a 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Query-string extractor that rejects with a 422.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// Path-parameter extractor that rejects with a 422.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
