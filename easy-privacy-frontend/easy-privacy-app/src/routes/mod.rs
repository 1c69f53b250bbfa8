pub mod final_policy;
pub mod home_page;
pub mod not_found;
pub mod policy_generator;
