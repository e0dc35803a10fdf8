use crate::domain::models::ServiceIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadServices,
    FetchEntry(ServiceIndex),
}
