pub mod film_work_repo;

pub use film_work_repo::FilmWorkRepo;
