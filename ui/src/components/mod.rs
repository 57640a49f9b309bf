pub mod head;
pub mod nav_bar;
pub mod project_card;
