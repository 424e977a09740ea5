pub mod models;
pub mod repositories;

use diesel::PgConnection;
use diesel::r2d2::{self, ConnectionManager as DbConnectionManager, PooledConnection};

pub type DbPool = r2d2::Pool<DbConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<DbConnectionManager<PgConnection>>;
