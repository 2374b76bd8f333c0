use minuta_core::{RecipeCatalog, WEEKDAYS};

#[test]
fn every_canonical_day_has_its_recipe() {
    let catalog = RecipeCatalog::weekly();
    for day in WEEKDAYS {
        let recipe = catalog.find_by_day(day).expect("recipe for canonical day");
        assert_eq!(recipe.day, day);
    }
    assert_eq!(catalog.len(), 7);
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let catalog = RecipeCatalog::weekly();
    for miss in ["", "lunes", "LUNES", "Lunes ", "Miercoles", "Monday", "detail/Lunes"] {
        assert!(catalog.find_by_day(miss).is_none(), "unexpected hit for {miss:?}");
    }
}

#[test]
fn recipes_iterate_in_weekday_order() {
    let catalog = RecipeCatalog::weekly();
    let days: Vec<_> = catalog.days().collect();
    assert_eq!(days, WEEKDAYS.to_vec());
}

#[test]
fn ingredients_keep_their_order() {
    let catalog = RecipeCatalog::weekly();
    let monday = catalog.find_by_day("Lunes").unwrap();
    assert_eq!(monday.name, "Ensalada de Quinoa");
    assert_eq!(monday.ingredients, vec!["Quinoa", "Tomate", "Palta", "Limón"]);
    assert_eq!(monday.notes, "Rica en fibra y proteínas vegetales.");

    let thursday = catalog.find_by_day("Jueves").unwrap();
    assert_eq!(thursday.ingredients.len(), 3);
}
