//! Static name pools for user and product naming.
//!
//! The dataset models an Indonesian marketplace, so user names are drawn from
//! gender-split Indonesian given-name pools plus a shared surname pool, and
//! product names lead with a marketing adjective.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::Gender;

const MALE_GIVEN: [&str; 24] = [
    "Agus", "Budi", "Dedi", "Eko", "Fajar", "Gilang", "Hendra", "Irfan", "Joko", "Krisna",
    "Lukman", "Made", "Nugroho", "Oka", "Putra", "Rizky", "Slamet", "Taufik", "Umar", "Wahyu",
    "Yoga", "Zaki", "Bayu", "Dimas",
];

const FEMALE_GIVEN: [&str; 24] = [
    "Ayu", "Bella", "Citra", "Dewi", "Eka", "Fitri", "Gita", "Hana", "Indah", "Juwita",
    "Kartika", "Lestari", "Maya", "Nadia", "Oktavia", "Putri", "Ratna", "Sari", "Tika", "Utami",
    "Vina", "Wulan", "Yanti", "Zahra",
];

const SURNAMES: [&str; 20] = [
    "Santoso", "Wijaya", "Saputra", "Pratama", "Hidayat", "Kusuma", "Siregar", "Nasution",
    "Handayani", "Rahayu", "Setiawan", "Permata", "Gunawan", "Susanto", "Halim", "Firmansyah",
    "Maulana", "Puspita", "Anggraini", "Hartono",
];

const PRODUCT_WORDS: [&str; 20] = [
    "Mega", "Super", "Prima", "Jaya", "Sentosa", "Maju", "Cemerlang", "Andalan", "Sukses",
    "Terang", "Mandiri", "Utama", "Karya", "Sinar", "Abadi", "Murni", "Cepat", "Hebat",
    "Juara", "Berkah",
];

/// Samples a full name consistent with the given gender.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R, gender: Gender) -> String {
    let pool: &[&str] = match gender {
        Gender::Male => &MALE_GIVEN,
        Gender::Female => &FEMALE_GIVEN,
    };
    // Pools are non-empty consts, choose cannot fail.
    let given = pool.choose(rng).unwrap();
    let surname = SURNAMES.choose(rng).unwrap();
    format!("{} {}", given, surname)
}

/// Samples the leading word of a product name.
pub fn product_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PRODUCT_WORDS.choose(rng).unwrap()
}
