//! Built-in people, places, cameras and tags offered by the search surfaces.
//!
//! There is no photo library behind these lists. They stand in for whatever a
//! host application would supply.

/// A person with the id of their placeholder avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
	pub name: &'static str,
	pub avatar_id: u16,
}

impl Person {
	const fn new(name: &'static str, avatar_id: u16) -> Self {
		Self { name, avatar_id }
	}

	#[must_use]
	pub fn avatar_url(&self) -> String {
		avatar_url(self.avatar_id)
	}
}

/// URL of the placeholder avatar with the given id.
#[must_use]
pub fn avatar_url(id: u16) -> String {
	format!("https://i.pravatar.cc/150?img={id}")
}

/// People suggested in the search box dropdown and the modal's people row.
pub const FEATURED_PEOPLE: [Person; 6] = [
	Person::new("Oliver Thompson", 12),
	Person::new("Sophia Martinez", 47),
	Person::new("Liam Johnson", 33),
	Person::new("Emma Williams", 68),
	Person::new("Noah Brown", 15),
	Person::new("Isabella Clark", 32),
];

/// Everyone listed by the people view.
pub const ROSTER: [Person; 72] = [
	Person::new("Ethan Rivers", 12),
	Person::new("Oliver Bennett", 13),
	Person::new("Mason Reed", 14),
	Person::new("Mason Thompson", 15),
	Person::new("James Carter", 16),
	Person::new("James Bennett", 17),
	Person::new("Lucas Gray", 18),
	Person::new("Lucas Adams", 19),
	Person::new("Lucas Bennett", 20),
	Person::new("Lucas Parker", 21),
	Person::new("Lucas Harris", 22),
	Person::new("Lucas Foster", 23),
	Person::new("Lucas Thompson", 24),
	Person::new("Liam Harris", 25),
	Person::new("Liam Bennett", 26),
	Person::new("Liam Reed", 27),
	Person::new("Liam Foster", 28),
	Person::new("Liam Thompson", 29),
	Person::new("Liam King", 30),
	Person::new("Liam Mitchell", 31),
	Person::new("Noah Scott", 32),
	Person::new("Noah King", 33),
	Person::new("Noah Mitchell", 34),
	Person::new("Noah Gray", 35),
	Person::new("Noah Carter", 36),
	Person::new("Noah Adams", 37),
	Person::new("Noah Parker", 38),
	Person::new("Alexander Wright", 39),
	Person::new("Benjamin Taylor", 40),
	Person::new("Daniel Martinez", 41),
	Person::new("Henry Wilson", 42),
	Person::new("Jackson Brown", 43),
	Person::new("Samuel Davis", 44),
	Person::new("William Johnson", 45),
	Person::new("Michael Smith", 46),
	Person::new("Amelia Brooks", 47),
	Person::new("Amelia Parker", 48),
	Person::new("Isabella Foster", 49),
	Person::new("Isabella Harris", 50),
	Person::new("Ava Mitchell", 51),
	Person::new("Ava Brooks", 52),
	Person::new("Olivia King", 53),
	Person::new("Olivia Reed", 54),
	Person::new("Olivia Carter", 55),
	Person::new("Olivia Mitchell", 56),
	Person::new("Olivia Gray", 57),
	Person::new("Olivia Brooks", 58),
	Person::new("Chloe Adams", 59),
	Person::new("Chloe Bennett", 60),
	Person::new("Chloe Brooks", 61),
	Person::new("Chloe Foster", 62),
	Person::new("Chloe Parker", 63),
	Person::new("Chloe Reed", 64),
	Person::new("Chloe Mitchell", 65),
	Person::new("Zoe Parker", 66),
	Person::new("Zoe King", 67),
	Person::new("Zoe Foster", 68),
	Person::new("Zoe Gray", 69),
	Person::new("Zoe Harris", 70),
	Person::new("Mia Thompson", 1),
	Person::new("Mia Bennett", 2),
	Person::new("Mia King", 3),
	Person::new("Mia Harris", 4),
	Person::new("Mia Reed", 5),
	Person::new("Mia Adams", 6),
	Person::new("Mia Mitchell", 7),
	Person::new("Sophia Martinez", 8),
	Person::new("Emma Williams", 9),
	Person::new("Charlotte Anderson", 10),
	Person::new("Harper Johnson", 11),
	Person::new("Grace Lee", 20),
	Person::new("Lily Chen", 21),
];

pub const LOCATIONS: [&str; 12] = [
	"Strawberry, Arizona, USA",
	"Phoenix, Arizona, USA",
	"Tucson, Arizona, USA",
	"Flagstaff, Arizona, USA",
	"Sedona, Arizona, USA",
	"Los Angeles, California, USA",
	"San Francisco, California, USA",
	"San Diego, California, USA",
	"New York, New York, USA",
	"Chicago, Illinois, USA",
	"Houston, Texas, USA",
	"Miami, Florida, USA",
];

/// Camera models; the first entry means "no restriction".
pub const CAMERAS: [&str; 18] = [
	crate::criteria::ANY_CAMERA,
	"Canon EOS R5",
	"Canon EOS 5D Mark IV",
	"Canon EOS 90D",
	"Nikon D850",
	"Nikon Z7",
	"Nikon D750",
	"Sony A7R IV",
	"Sony A7 III",
	"Sony A6400",
	"Fujifilm X-T4",
	"Fujifilm X-Pro3",
	"Olympus OM-D E-M1 Mark III",
	"Panasonic Lumix GH5",
	"iPhone 14 Pro",
	"iPhone 13 Pro",
	"Samsung Galaxy S23 Ultra",
	"Google Pixel 7 Pro",
];

pub const TAG_SUGGESTIONS: [&str; 6] = [
	"summer 2025",
	"holiday",
	"Expedition into nature's wonders",
	"Pursuit of excitement",
	"Companions on a quest",
	"Exploring fresh vistas",
];

/// Tags a fresh advanced search starts with.
pub const DEFAULT_TAGS: [&str; 2] = ["beach", "summer 2025"];

pub const RECENT_SEARCHES: [&str; 3] = ["beach", "emma", "christmas holidays 2025"];

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn roster_names_are_unique() {
		let names: HashSet<_> = ROSTER.iter().map(|person| person.name).collect();
		assert_eq!(names.len(), ROSTER.len());
	}

	#[test]
	fn avatar_urls_use_the_placeholder_service() {
		assert_eq!(
			FEATURED_PEOPLE[0].avatar_url(),
			"https://i.pravatar.cc/150?img=12"
		);
	}

	#[test]
	fn camera_list_starts_with_any_camera() {
		assert_eq!(CAMERAS[0], "Any camera");
		assert_eq!(CAMERAS.len(), 18);
	}
}
