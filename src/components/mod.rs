//! Reusable view components shared across pages.

pub mod campaign_card;
pub mod creator_card;
pub mod name_prompt;
