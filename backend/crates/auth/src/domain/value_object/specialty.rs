//! Medical specialty catalogue
//!
//! Offered to clients as suggestions. Profiles may list specialties outside it.

pub const SPECIALTIES: [&str; 15] = [
    "Ortopedia",
    "Columna",
    "Traumatología",
    "Cardiología",
    "Neurología",
    "Anestesiología",
    "Cirugía General",
    "Ginecología",
    "Urología",
    "Oftalmología",
    "Otorrinolaringología",
    "Dermatología",
    "Radiología",
    "Patología",
    "Medicina Interna",
];

pub fn catalogue() -> &'static [&'static str] {
    &SPECIALTIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_is_fixed_and_unique() {
        let names: HashSet<_> = catalogue().iter().collect();
        assert_eq!(names.len(), 15);
        assert_eq!(catalogue()[0], "Ortopedia");
        assert!(catalogue().contains(&"Medicina Interna"));
    }
}
