pub mod attachments;
pub mod badges;
pub mod bar_chart;
pub mod comments;
pub mod issue_table;
pub mod protected_route;
pub mod sidebar;
pub mod stat_card;
