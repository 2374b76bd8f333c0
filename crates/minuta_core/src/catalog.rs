/// Canonical weekday keys, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// One weekday's suggested meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub day: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub notes: String,
}

impl Recipe {
    fn new(day: &str, name: &str, ingredients: &[&str], notes: &str) -> Self {
        Self {
            day: day.to_owned(),
            name: name.to_owned(),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            notes: notes.to_owned(),
        }
    }
}

/// Read-only weekly menu. Keyed by [`WEEKDAYS`]; no add/update/remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn weekly() -> Self {
        let recipes = vec![
            Recipe::new(
                "Lunes",
                "Ensalada de Quinoa",
                &["Quinoa", "Tomate", "Palta", "Limón"],
                "Rica en fibra y proteínas vegetales.",
            ),
            Recipe::new(
                "Martes",
                "Pollo al horno con verduras",
                &["Pechuga de pollo", "Zanahoria", "Brócoli", "Papas"],
                "Fuente de proteínas magras y vitaminas.",
            ),
            Recipe::new(
                "Miércoles",
                "Sopa de verduras frescas",
                &["Zanahoria", "Zapallo", "Apio", "Cebolla"],
                "Baja en calorías, rica en minerales.",
            ),
            Recipe::new(
                "Jueves",
                "Pescado a la plancha",
                &["Reineta", "Limón", "Ensalada verde"],
                "Rico en omega-3 y proteínas.",
            ),
            Recipe::new(
                "Viernes",
                "Pasta integral con salsa de tomate",
                &["Pasta integral", "Tomate", "Albahaca"],
                "Buena fuente de energía y antioxidantes.",
            ),
            Recipe::new(
                "Sábado",
                "Cazuela de vacuno",
                &["Carne de vacuno", "Zapallo", "Choclo", "Papa"],
                "Plato tradicional chileno, nutritivo y reconfortante.",
            ),
            Recipe::new(
                "Domingo",
                "Tortilla de verduras",
                &["Huevos", "Espinaca", "Zanahoria", "Cebolla"],
                "Alta en proteínas y vitaminas, ideal para cerrar la semana.",
            ),
        ];
        debug_assert!(recipes
            .iter()
            .map(|r| r.day.as_str())
            .eq(WEEKDAYS.iter().copied()));
        Self { recipes }
    }

    /// Exact, case-sensitive lookup. A miss is a normal outcome, not an error.
    pub fn find_by_day(&self, day: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.day == day)
    }

    /// Recipes in weekday order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|recipe| recipe.day.as_str())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::weekly()
    }
}
