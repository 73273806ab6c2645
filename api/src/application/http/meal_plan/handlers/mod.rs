pub mod recommend_meal;
