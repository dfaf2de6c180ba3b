//! Ingredientes, recetas y platos entregados
use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
};

use serde::Deserialize;

/// Ingrediente identificado por `id`. El nombre es solo para mostrar.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientType {
    pub id: u32,
    pub name: String,
}

impl IngredientType {
    pub fn new(id: u32, name: &str) -> IngredientType {
        IngredientType {
            id,
            name: name.to_string(),
        }
    }
}

impl PartialEq for IngredientType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IngredientType {}

impl Hash for IngredientType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Receta: un nombre y los ingredientes que requiere. Importa cuantas veces aparece cada uno.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefinition {
    pub name: String,
    pub ingredients: Vec<IngredientType>,
}

impl RecipeDefinition {
    pub fn new(name: &str, ingredients: Vec<IngredientType>) -> RecipeDefinition {
        RecipeDefinition {
            name: name.to_string(),
            ingredients,
        }
    }

    /// Indica si el plato tiene exactamente los mismos ingredientes, sin importar el orden.
    pub fn is_satisfied_by(&self, plate: &Plate) -> bool {
        ingredient_counts(&self.ingredients) == ingredient_counts(plate.ingredients())
    }
}

/// Plato que un jugador intenta entregar.
#[derive(Debug, Clone, Default)]
pub struct Plate {
    ingredients: Vec<IngredientType>,
}

impl Plate {
    pub fn new() -> Plate {
        Plate {
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredients(ingredients: Vec<IngredientType>) -> Plate {
        Plate { ingredients }
    }

    pub fn add_ingredient(&mut self, ingredient: IngredientType) {
        self.ingredients.push(ingredient);
    }

    pub fn ingredients(&self) -> &[IngredientType] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Cuenta cuantas veces aparece cada id de ingrediente.
pub fn ingredient_counts(ingredients: &[IngredientType]) -> HashMap<u32, usize> {
    let mut counts = HashMap::new();
    for ingredient in ingredients {
        *counts.entry(ingredient.id).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> IngredientType {
        IngredientType::new(1, "Tomato")
    }

    fn lettuce() -> IngredientType {
        IngredientType::new(2, "Lettuce")
    }

    #[test]
    fn should_compare_ingredients_by_id_only() {
        assert_eq!(tomato(), IngredientType::new(1, "Red tomato"));
        assert_ne!(tomato(), lettuce());
    }

    #[test]
    fn should_match_a_plate_in_any_order() {
        let salad = RecipeDefinition::new("Salad", vec![lettuce(), tomato()]);
        let plate = Plate::with_ingredients(vec![tomato(), lettuce()]);
        assert_eq!(true, salad.is_satisfied_by(&plate));
    }

    #[test]
    fn should_take_duplicates_into_account() {
        let double_tomato = RecipeDefinition::new("Double tomato", vec![tomato(), tomato()]);
        let single = Plate::with_ingredients(vec![tomato()]);
        let triple = Plate::with_ingredients(vec![tomato(), tomato(), tomato()]);
        let double = Plate::with_ingredients(vec![tomato(), tomato()]);
        assert_eq!(false, double_tomato.is_satisfied_by(&single));
        assert_eq!(false, double_tomato.is_satisfied_by(&triple));
        assert_eq!(true, double_tomato.is_satisfied_by(&double));
    }

    #[test]
    fn should_not_match_a_plate_with_extra_ingredients() {
        let salad = RecipeDefinition::new("Salad", vec![lettuce(), tomato()]);
        let mut plate = Plate::new();
        plate.add_ingredient(tomato());
        plate.add_ingredient(lettuce());
        plate.add_ingredient(IngredientType::new(3, "Bread"));
        assert_eq!(false, salad.is_satisfied_by(&plate));
    }

    #[test]
    fn should_count_ingredients_by_id() {
        let counts = ingredient_counts(&[tomato(), lettuce(), IngredientType::new(1, "Tomato")]);
        assert_eq!(Some(&2), counts.get(&1));
        assert_eq!(Some(&1), counts.get(&2));
        assert_eq!(2, counts.len());
    }
}
