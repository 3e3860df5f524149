pub mod links;
pub mod user;
pub mod user_follow;

/*
 Accounts are created outside the HTTP api (seeding / account management).
 The follow graph is one edge table; "followers" and "follows" are just the
 two directions you can walk it, see links.rs.
 */
