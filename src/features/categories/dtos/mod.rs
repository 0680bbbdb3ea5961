mod category_dto;

pub use category_dto::{to_category_map, CategoriesResponseDto, CategoryMap, CreateCategoryDto};
