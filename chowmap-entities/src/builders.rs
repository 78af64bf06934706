pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{patch_builder::*, place_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, place::*, price::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.place.address = Some(address.into());
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.place.pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.place.city = Some(city.into());
            self
        }
        pub fn neighborhood(mut self, neighborhood: &str) -> Self {
            self.place.neighborhood = Some(neighborhood.into());
            self
        }
        pub fn cuisines(mut self, cuisines: Vec<impl Into<String>>) -> Self {
            self.place.cuisines = cuisines.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.place.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.place.rating = Some(rating.into());
            self
        }
        pub fn price(mut self, price: PriceTier) -> Self {
            self.place.price = Some(price);
            self
        }
        pub fn would_return(mut self, would_return: bool) -> Self {
            self.place.would_return = Some(would_return);
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.place.notes = Some(notes.into());
            self
        }
        pub fn photo_url(mut self, photo_url: &str) -> Self {
            self.place.photo_url = Some(photo_url.into());
            self
        }
        pub fn website(mut self, website: &str) -> Self {
            self.place.website = Some(website.into());
            self
        }
        pub fn visited_on(mut self, visited_on: &str) -> Self {
            self.place.visited_on = Some(visited_on.into());
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: "".into(),
                    name: "".into(),
                    address: None,
                    pos: None,
                    city: None,
                    neighborhood: None,
                    cuisines: vec![],
                    tags: vec![],
                    rating: None,
                    price: None,
                    would_return: None,
                    notes: None,
                    photo_url: None,
                    website: None,
                    visited_on: None,
                },
            }
        }
    }
}

pub mod patch_builder {

    use super::*;
    use crate::{place::*, price::*};

    #[derive(Debug)]
    pub struct PlacePatchBuild {
        patch: PlacePatch,
    }

    impl PlacePatchBuild {
        pub fn rating(mut self, rating: f64) -> Self {
            self.patch.rating = FieldEdit::Set(rating.into());
            self
        }
        pub fn clear_rating(mut self) -> Self {
            self.patch.rating = FieldEdit::Clear;
            self
        }
        pub fn price(mut self, price: PriceTier) -> Self {
            self.patch.price = FieldEdit::Set(price);
            self
        }
        pub fn clear_price(mut self) -> Self {
            self.patch.price = FieldEdit::Clear;
            self
        }
        pub fn would_return(mut self, would_return: bool) -> Self {
            self.patch.would_return = FieldEdit::Set(would_return);
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.patch.notes = FieldEdit::Set(notes.into());
            self
        }
        pub fn clear_notes(mut self) -> Self {
            self.patch.notes = FieldEdit::Clear;
            self
        }
        pub fn photo_url(mut self, photo_url: &str) -> Self {
            self.patch.photo_url = FieldEdit::Set(photo_url.into());
            self
        }
        pub fn finish(self) -> PlacePatch {
            self.patch
        }
    }

    impl Builder for PlacePatch {
        type Build = PlacePatchBuild;
        fn build() -> PlacePatchBuild {
            PlacePatchBuild {
                patch: PlacePatch::default(),
            }
        }
    }
}
