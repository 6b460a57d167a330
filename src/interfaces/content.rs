//! Static copy shown around the prediction.

pub const PAGE_TITLE: &str = "Generic HDB Resale Price Prediction";
pub const APP_HEADING: &str = "🏠 Generic HDB Resale Price Prediction App - Accuracy Model";

pub const INTRO: &str = "This interactive app predicts future HDB resale prices in Singapore \
using a machine learning model trained on historical resale transactions and economic \
indicators (CPI).";

pub const HOW_IT_WORKS: &[&str] = &[
    "Leveraging past HDB resale data from Data.gov.sg, this Random Forest model predicts both \
real (inflation-adjusted) and nominal prices tailored to your selected flat configuration.",
    "Future CPI values were forecasted with linear regression, adjusting predicted HDB prices \
for inflation.",
];

pub const DATA_SOURCE_URL: &str = "https://data.gov.sg";

pub const BASELINE_NOTE: &str = "*This is a baseline model and does not currently incorporate \
additional features such as nearby amenities.";

pub const BANNER_CAPTION: &str = "*Forecasts for 1 room flats were excluded due to insufficient \
data and inaccurate predictions during model training.*";

pub const SIDEBAR_HEADING: &str = "Select Flat Features";
pub const RESULTS_HEADING: &str = "Predicted HDB Resale Prices";

/// (label, text) pairs for the "About this Model" section
pub const ABOUT_MODEL: &[(&str, &str)] = &[
    (
        "Data",
        "Multiple HDB resale transactions (1990-2020) data sets from Data.gov.sg were merged, \
cleaned and analysed.",
    ),
    (
        "Model",
        "HDB Price Prediction: Random Forest Regressor | CPI Forecasting: Linear Regression.",
    ),
    (
        "Output",
        "Predicted prices based on selected features multiplied by forecasted CPI value.",
    ),
    (
        "Feature Engineering",
        "Nominal prices were adjusted for inflation with Consumer Price Index (CPI) data, \
reflecting real prices.",
    ),
    (
        "Features",
        "Year, Lease Years Left, Flat Type, Town, Storey Range",
    ),
];

pub const DISCLAIMER: &str = "This app is part of Jia Ling's personal project and accuracy may \
vary due to unpredictable changes in seasonality or economic events.";

pub const GREETING: &str =
    "Hi, I am Teo Jia Ling (Jayelle). I love visualizing and deriving insights from complicated data!";

pub const PORTFOLIO_HEADING: &str = "Check Out Jayelle's Portfolio!";
pub const PORTFOLIO_INTRO: &str = "Welcome! Here are some of my personal websites and portfolio \
pages where you can learn more about me and my work:";

/// (name, url) in display order
pub const PORTFOLIO_LINKS: &[(&str, &str)] = &[
    ("Personal Website 1", "https://jayelle0609.github.io/"),
    ("Portfolio Website 2", "https://jayelle0609.github.io/"),
    (
        "Tableau Visualizations",
        "https://public.tableau.com/app/profile/jialingteo/vizzes",
    ),
    ("GitHub Projects & Code", "https://github.com/jayelle0609"),
    ("Specificity HDB Model App", "https://jayellehdbs.streamlit.app/"),
    (
        "Dad Jokes Generator App (API Automated)",
        "https://jayelledadjokes.streamlit.app/",
    ),
];

pub const OUTRO: &str = "Feel free to reach out or explore more!";
pub const CONTACT_EMAIL: &str = "mailto:jayelleteo@gmail.com";

pub const MODEL_CAVEAT: &str = "I have some caveats regarding the newer model. While the new \
model offers greater specificity, its overall accuracy may not generalize well.";
pub const MODEL_CAVEAT_URL: &str = "https://github.com/jayelle0609/HDB_Historical_Price_Analysis/blob/main/README.md#3-forecasting";
