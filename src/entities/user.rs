use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender of a generated user. Names are sampled consistently with this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Gender {
    Male,
    Female,
}

/// City a user shops from. Closed set; the dashboards group by these labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum City {
    Jakarta,
    Bandung,
    Surabaya,
    Medan,
    Makassar,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Jakarta,
        City::Bandung,
        City::Surabaya,
        City::Medan,
        City::Makassar,
    ];
}

/// One row of the `users` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub city: City,
    pub join_date: NaiveDate,
}

impl User {
    pub const CSV_HEADER: [&'static str; 6] =
        ["user_id", "name", "gender", "age", "city", "join_date"];

    /// Formats the sequential user id, e.g. `U00042` for index 42.
    pub fn id_for(index: usize) -> String {
        format!("U{:05}", index)
    }
}
