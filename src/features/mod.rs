pub mod bills;
pub mod congress;
pub mod legiscan;
