pub mod errors;
pub mod models;

use rusqlite::{params, Connection};
use crate::manager_db::errors::DBError;
use crate::manager_db::models::WeatherRecord;

pub struct DB {
    db_conn: Connection,
}

impl DB {

    /// Creates a new instance of DB
    ///
    /// The weather table is append-only: one row per successful fetch, no
    /// updates, no deletes and no retention limit.
    ///
    /// # Arguments
    ///
    /// * 'db_path' - full path to db file
    pub fn new(db_path: &str) -> Result<Self, DBError> {
        let db_conn = Connection::open(db_path)?;
        db_conn.execute(
           "CREATE TABLE IF NOT EXISTS weather (
                id integer primary key autoincrement,
                city text not null,
                temperature real not null,
                description text not null,
                dt text not null
           )",
           [],
        )?;

        Ok(DB { db_conn })
    }

    /// Inserts a record in the database
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as given by the user
    /// * 'temperature' - current temperature
    /// * 'description' - weather description from the provider
    /// * 'dt' - formatted local time of the fetch
    pub fn insert_record(&self, city: &str, temperature: f64, description: &str, dt: &str) -> Result<(), DBError> {

        self.db_conn.execute(
            "INSERT INTO weather (city, temperature, description, dt) values (?1, ?2, ?3, ?4)",
            params![city, temperature, description, dt],
        )?;

        Ok(())
    }

    /// Returns the most recently inserted records, most recent first
    ///
    /// # Arguments
    ///
    /// * 'limit' - maximum number of records to return
    pub fn recent_history(&self, limit: u32) -> Result<Vec<WeatherRecord>, DBError> {
        let mut result: Vec<WeatherRecord> = Vec::new();

        let mut stmt = self.db_conn.prepare(
            "SELECT city, temperature, description, dt
                FROM weather
                ORDER BY id DESC LIMIT ?1;",
        )?;
        let mut rows = stmt.query(params![limit])?;

        while let Some(row) = rows.next()? {
            result.push(WeatherRecord {
                city: row.get(0)?,
                temperature: row.get(1)?,
                description: row.get(2)?,
                dt: row.get(3)?,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> DB {
        DB::new(":memory:").unwrap()
    }

    #[test]
    fn insert_and_read_back() {
        let db = memory_db();

        db.insert_record("London", 17.3, "light rain", "23-Aug-2026 10:15:00 AM").unwrap();

        let history = db.recent_history(6).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].city, "London");
        assert_eq!(history[0].temperature, 17.3);
        assert_eq!(history[0].description, "light rain");
        assert_eq!(history[0].dt, "23-Aug-2026 10:15:00 AM");
    }

    #[test]
    fn history_is_capped_and_most_recent_first() {
        let db = memory_db();

        for i in 0..8 {
            db.insert_record(&format!("City{}", i), i as f64, "clear sky", "dt").unwrap();
        }

        let history = db.recent_history(6).unwrap();
        assert_eq!(history.len(), 6);

        // newest insert (City7) comes first, strictly descending from there
        for (n, record) in history.iter().enumerate() {
            assert_eq!(record.city, format!("City{}", 7 - n));
        }
    }

    #[test]
    fn duplicate_cities_create_duplicate_rows() {
        let db = memory_db();

        db.insert_record("Paris", 20.0, "clear sky", "dt1").unwrap();
        db.insert_record("Paris", 21.0, "few clouds", "dt2").unwrap();

        let history = db.recent_history(6).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].dt, "dt2");
        assert_eq!(history[1].dt, "dt1");
    }

    #[test]
    fn empty_table_yields_empty_history() {
        let db = memory_db();
        assert!(db.recent_history(6).unwrap().is_empty());
    }
}
