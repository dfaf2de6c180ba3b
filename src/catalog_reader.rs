use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::catalog::RecipeCatalog;
use crate::errors::DeliveryError;
use crate::recipe::{IngredientType, RecipeDefinition};

#[derive(Deserialize, Debug)]
struct JsonRecipe {
    name: String,
    ingredients: Vec<u32>,
}

#[derive(Deserialize)]
struct CatalogConfiguration {
    ingredients: Vec<IngredientType>,
    recipes: Vec<JsonRecipe>,
}

fn read_configuration<R: Read>(reader: R) -> Result<CatalogConfiguration, Box<dyn Error>> {
    let configuration: CatalogConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration)
}

fn build_recipes(
    configuration: CatalogConfiguration,
) -> Result<Vec<RecipeDefinition>, DeliveryError> {
    let ingredients: HashMap<u32, IngredientType> = configuration
        .ingredients
        .into_iter()
        .map(|ingredient| (ingredient.id, ingredient))
        .collect();

    let mut recipes = Vec::new();
    for json_recipe in configuration.recipes {
        let mut required = Vec::new();
        for id in json_recipe.ingredients {
            let ingredient = ingredients
                .get(&id)
                .ok_or(DeliveryError::UnknownIngredient(id))?;
            required.push(ingredient.clone());
        }
        debug!("[CATALOG] Loaded recipe {}", json_recipe.name);
        recipes.push(RecipeDefinition::new(&json_recipe.name, required));
    }
    Ok(recipes)
}

/// Arma el catalogo a partir de un JSON con ingredientes y recetas.
/// Las recetas referencian a los ingredientes por su id.
pub fn parse_catalog<R: Read>(reader: R) -> Result<RecipeCatalog, DeliveryError> {
    let configuration = read_configuration(reader)
        .map_err(|err| DeliveryError::FileReaderError(err.to_string()))?;
    let catalog = RecipeCatalog::new(build_recipes(configuration)?)?;
    info!("[CATALOG] {} recipes available", catalog.len());
    Ok(catalog)
}

pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog, DeliveryError> {
    let file = File::open(path).map_err(|err| DeliveryError::FileReaderError(err.to_string()))?;
    parse_catalog(BufReader::new(file))
}
