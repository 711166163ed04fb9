pub mod film_work;
