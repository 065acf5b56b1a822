use diesel::{r2d2, PgConnection};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use anyhow::Result;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

pub fn build_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;

    Ok(pool)
}

pub fn get_conn(pool: &DbPool) -> Result<DbConn> {
    let conn = pool.get()?;

    Ok(conn)
}
