use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccineCategory {
    /// State-funded national immunisation programme.
    Free,
    /// Self-funded, recommended.
    Paid,
    /// Self-funded, elective.
    Optional,
}

impl VaccineCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Optional => "Optional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Necessity {
    Required,
    Recommended,
    Optional,
}

/// Reference entry; a dose is due at each listed month and only at those months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaccineRecord {
    pub name: &'static str,
    pub category: VaccineCategory,
    pub age_months: &'static [u16],
    pub price: u32,
    pub necessity: Necessity,
    pub description: &'static str,
}

impl VaccineRecord {
    pub fn is_due_at(&self, age_months: u16) -> bool {
        self.age_months.contains(&age_months)
    }
}

/// The three fixed vaccine lists. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineCatalogue {
    free: Vec<VaccineRecord>,
    paid: Vec<VaccineRecord>,
    optional: Vec<VaccineRecord>,
}

impl VaccineCatalogue {
    pub fn standard() -> Self {
        Self {
            free: free_vaccines(),
            paid: paid_vaccines(),
            optional: optional_vaccines(),
        }
    }

    pub fn free(&self) -> &[VaccineRecord] {
        &self.free
    }

    pub fn paid(&self) -> &[VaccineRecord] {
        &self.paid
    }

    pub fn optional(&self) -> &[VaccineRecord] {
        &self.optional
    }
}

const fn free(
    name: &'static str,
    age_months: &'static [u16],
    description: &'static str,
) -> VaccineRecord {
    VaccineRecord {
        name,
        category: VaccineCategory::Free,
        age_months,
        price: 0,
        necessity: Necessity::Required,
        description,
    }
}

const fn paid(
    name: &'static str,
    age_months: &'static [u16],
    price: u32,
    description: &'static str,
) -> VaccineRecord {
    VaccineRecord {
        name,
        category: VaccineCategory::Paid,
        age_months,
        price,
        necessity: Necessity::Recommended,
        description,
    }
}

const fn optional(
    name: &'static str,
    age_months: &'static [u16],
    price: u32,
    description: &'static str,
) -> VaccineRecord {
    VaccineRecord {
        name,
        category: VaccineCategory::Optional,
        age_months,
        price,
        necessity: Necessity::Optional,
        description,
    }
}

fn free_vaccines() -> Vec<VaccineRecord> {
    vec![
        free(
            "Hepatitis B vaccine",
            &[0, 1, 6],
            "Prevents hepatitis B infection; first dose within 24 hours of birth.",
        ),
        free(
            "BCG vaccine",
            &[0],
            "Protects against severe forms of childhood tuberculosis.",
        ),
        free(
            "Inactivated poliovirus vaccine (IPV)",
            &[2, 3],
            "First two poliomyelitis doses given by injection.",
        ),
        free(
            "Bivalent oral poliovirus vaccine (bOPV)",
            &[4, 48],
            "Oral poliomyelitis doses completing the polio series.",
        ),
        free(
            "DTaP vaccine",
            &[3, 4, 5, 18],
            "Diphtheria, tetanus and acellular pertussis primary series and booster.",
        ),
        free(
            "DT vaccine",
            &[72],
            "Diphtheria and tetanus booster at school entry.",
        ),
        free(
            "MMR vaccine",
            &[8, 18],
            "Measles, mumps and rubella.",
        ),
        free(
            "Japanese encephalitis live vaccine",
            &[8, 24],
            "Prevents Japanese encephalitis transmitted by mosquitoes.",
        ),
        free(
            "Meningococcal polysaccharide A vaccine",
            &[6, 9],
            "Group A meningococcal meningitis primary doses.",
        ),
        free(
            "Meningococcal polysaccharide A+C vaccine",
            &[36, 72],
            "Group A and C meningococcal meningitis boosters.",
        ),
        free(
            "Hepatitis A live vaccine",
            &[18],
            "Prevents hepatitis A infection.",
        ),
    ]
}

fn paid_vaccines() -> Vec<VaccineRecord> {
    vec![
        paid(
            "Hib vaccine",
            &[2, 3, 4, 18],
            120,
            "Haemophilus influenzae type b; prevents meningitis and pneumonia.",
        ),
        paid(
            "13-valent pneumococcal conjugate vaccine",
            &[2, 4, 6, 12],
            698,
            "Protects against invasive pneumococcal disease in infants.",
        ),
        paid(
            "Pentavalent rotavirus vaccine",
            &[2, 3, 4],
            320,
            "Oral vaccine preventing severe rotavirus diarrhoea.",
        ),
        paid(
            "EV71 vaccine",
            &[6, 7],
            228,
            "Prevents severe hand, foot and mouth disease caused by enterovirus 71.",
        ),
        paid(
            "Varicella vaccine",
            &[12, 48],
            165,
            "Two-dose chickenpox protection.",
        ),
        paid(
            "Influenza vaccine",
            &[6, 7, 24, 36, 48, 60, 72],
            95,
            "Seasonal influenza; two doses in the first season, then annually.",
        ),
    ]
}

fn optional_vaccines() -> Vec<VaccineRecord> {
    vec![
        optional(
            "23-valent pneumococcal polysaccharide vaccine",
            &[24],
            230,
            "Broader pneumococcal coverage for children with higher risk.",
        ),
        optional(
            "Meningococcal ACYW135 conjugate vaccine",
            &[36],
            188,
            "Extends meningococcal protection to groups W135 and Y.",
        ),
        optional(
            "9-valent HPV vaccine",
            &[108, 110, 114],
            1318,
            "Human papillomavirus protection, most effective before adolescence.",
        ),
        optional(
            "Hepatitis E vaccine",
            &[192, 193, 198],
            180,
            "Three-dose hepatitis E series for older adolescents.",
        ),
    ]
}
