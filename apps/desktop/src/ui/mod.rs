pub mod banner;
pub mod dashboard;
pub mod notes_list;
pub mod style;
pub mod tabs;
pub mod transition;
