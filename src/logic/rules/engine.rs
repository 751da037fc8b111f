use super::{bajra::BajraRule, cotton::CottonRule, rice::RiceRule, wheat::WheatRule, CropRule};
use crate::error::{AdvisorError, Result};
use crate::models::{CropRecommendation, SoilProfile};

pub struct RecommendationEngine {
    crops: Vec<Box<dyn CropRule>>,
}

impl RecommendationEngine {
    /// Crops are reported in this order. New crops go at the end.
    pub fn new() -> Self {
        Self::with_crops(vec![
            Box::new(WheatRule),
            Box::new(RiceRule),
            Box::new(CottonRule),
            Box::new(BajraRule),
        ])
    }

    pub fn with_crops(crops: Vec<Box<dyn CropRule>>) -> Self {
        Self { crops }
    }

    /// Evaluate every crop against the profile.
    ///
    /// Fails with `InvalidProfile` before any crop is looked at if a
    /// measurement is not finite. Crops with no matching tier are omitted.
    pub fn evaluate(&self, profile: &SoilProfile) -> Result<Vec<CropRecommendation>> {
        profile.validate()?;

        Ok(self
            .crops
            .iter()
            .filter_map(|crop| crop.evaluate(profile))
            .collect())
    }

    /// Evaluate a single crop by id. `Ok(None)` means the crop has no
    /// tier for this profile; an id the engine does not know is an error.
    pub fn evaluate_crop(
        &self,
        crop_id: &str,
        profile: &SoilProfile,
    ) -> Result<Option<CropRecommendation>> {
        profile.validate()?;

        let crop = self
            .crops
            .iter()
            .find(|c| c.id() == crop_id)
            .ok_or_else(|| AdvisorError::UnknownCrop(crop_id.to_string()))?;
        Ok(crop.evaluate(profile))
    }

    /// Evaluate all crops, or only `crop_id` when one is given.
    pub fn evaluate_selection(
        &self,
        profile: &SoilProfile,
        crop_id: Option<&str>,
    ) -> Result<Vec<CropRecommendation>> {
        match crop_id {
            Some(id) => Ok(self.evaluate_crop(id, profile)?.into_iter().collect()),
            None => self.evaluate(profile),
        }
    }

    pub fn crops(&self) -> impl Iterator<Item = &dyn CropRule> {
        self.crops.iter().map(|c| c.as_ref())
    }

    pub fn list_crops(&self) -> Vec<(&'static str, &'static str)> {
        self.crops.iter().map(|c| (c.id(), c.name())).collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
