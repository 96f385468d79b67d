use museo_core::{KeyObject, Museum, RequestContext, Section, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a request context for the given user
#[allow(dead_code)]
pub fn ctx(user_id: &str) -> RequestContext {
    RequestContext::new(user_id)
}

/// Insert a museum, returning its id
#[allow(dead_code)]
pub fn add_museum(store: &mut Store, id: &str, name: &str, city: &str) -> String {
    let museum = Museum::new(id.to_string(), name.to_string(), city.to_string());
    store.insert_museum(museum);
    id.to_string()
}

/// Insert a section and wire it into its museum's section_ids
#[allow(dead_code)]
pub fn add_section(store: &mut Store, museum_id: &str, id: &str, name: &str, floor: i32) -> String {
    let section = Section::new(
        id.to_string(),
        museum_id.to_string(),
        name.to_string(),
        floor,
    );
    store.insert_section(section);

    let museum = store.get_museum_mut(museum_id).unwrap();
    museum.add_section_id(id.to_string());

    id.to_string()
}

/// Insert a key object and wire it into its section's key_object_ids
#[allow(dead_code)]
pub fn add_key_object(store: &mut Store, section_id: &str, id: &str, name: &str) -> String {
    let key_object = KeyObject::new(id.to_string(), section_id.to_string(), name.to_string());
    store.insert_key_object(key_object);

    let section = store.get_section_mut(section_id).unwrap();
    section.add_key_object_id(id.to_string());

    id.to_string()
}

/// Seed one museum with two sections on different floors.
///
/// Returns (museum_id, floor1_section_id, floor0_section_id).
#[allow(dead_code)]
pub fn setup_two_floor_museum(store: &mut Store) -> (String, String, String) {
    let museum = add_museum(store, "m1", "Louvre Museum", "Paris");
    let upper = add_section(store, &museum, "s1", "Paintings", 1);
    let ground = add_section(store, &museum, "s2", "Sculptures", 0);
    (museum, upper, ground)
}
