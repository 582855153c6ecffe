pub mod admin;
pub mod advertise;
pub mod affiliates;
pub mod contest;
pub mod home;
pub mod promo;
pub mod spin;
pub mod tasks;
pub mod wallet;
pub mod withdraw;
