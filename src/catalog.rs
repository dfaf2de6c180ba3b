//! Catalogo de recetas que se pueden pedir. No cambia despues de creado.
use log::error;

use crate::{errors::DeliveryError, random::RandomChoiceSource, recipe::RecipeDefinition};

#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<RecipeDefinition>,
}

impl RecipeCatalog {
    /// Falla si no hay recetas: sin ellas no se podria generar ningun pedido.
    pub fn new(recipes: Vec<RecipeDefinition>) -> Result<RecipeCatalog, DeliveryError> {
        if recipes.is_empty() {
            return Err(DeliveryError::EmptyCatalog);
        }
        Ok(RecipeCatalog { recipes })
    }

    pub fn recipes(&self) -> &[RecipeDefinition] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Elige una receta al azar, todas con la misma probabilidad.
    pub fn pick_random(
        &self,
        random: &mut dyn RandomChoiceSource,
    ) -> Result<&RecipeDefinition, DeliveryError> {
        if self.recipes.is_empty() {
            return Err(DeliveryError::EmptyCatalog);
        }
        let index = random.choose_index(self.recipes.len());
        self.recipes.get(index).ok_or_else(|| {
            error!(
                "[CATALOG] Random source picked index {} out of {} recipes",
                index,
                self.recipes.len()
            );
            DeliveryError::RecipeIndexOutOfRange
        })
    }
}
