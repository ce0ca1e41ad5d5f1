//! Documentos GraphQL del catálogo de operaciones
//!
//! Cadenas fijas alineadas con el schema actual del servidor. Los selection
//! sets forman parte del contrato wire y no se generan dinámicamente; cada
//! documento repite su selection set completo, igual que el schema lo
//! publica.

pub const QUERY_JOURNEY_CONFIG: &str = r"
  query getJourneyConfig($journey: String!) {
    getJourneyConfig(journey: $journey) {
      name
      origin {
        __typename
        ... on OriginDestinationBase {
          name
          origin_type
          icon
        }
        ... on SelectionList {
          name
          origin_type
          icon
          selection_list {
            name
            read_access
          }
        }
      }
      destination {
        __typename
        ... on OriginDestinationBase {
          name
          origin_type
          icon
        }
        ... on SelectionList {
          name
          origin_type
          icon
          selection_list {
            name
            read_access
          }
        }
      }
      tracking_points {
        __typename
        ... on TrackingPointConfigBase {
          type
          status
          status_name
          location
          flow {
            next_tracking_points
            is_initial
            vehicle_action
            no_of_images
          }
          read_access
          full_access
        }
        ... on UserTrackingPointConfig {
          type
          status
          status_name
          location
          ui {
            icon
            color
            text_color
            button_text
            category_text
          }
          flow {
            next_tracking_points
            is_initial
            vehicle_action
            no_of_images
          }
          read_access
          full_access
        }
      }
    }
  }
";

pub const QUERY_MENU_ITEMS: &str = r"
  query getMenuItems {
    getMenuItems {
      journey
      status
      category
      menu_item
      cognito_group
      ui {
        icon
        color
        text_color
        button_text
        category_text
      }
      flow {
        next_tracking_points
        is_initial
        vehicle_action
        no_of_images
      }
    }
  }
";

pub const QUERY_TEN_BAGS: &str = r"
  query getTenBags {
    getTenBags {
      flight_no
      scheduled_date
      bag_tag_no
      bag_tag_last_five
      bag_status
      bag_journey
      last_process_ts
    }
  }
";

pub const QUERY_TRACKING_POINT_BY_ID: &str = r"
  query getTrackingPointById(
    $bag_tag_no: String!
    $tracking_point_id: String!
  ) {
    getTrackingPointById(
      bag_tag_no: $bag_tag_no
      tracking_point_id: $tracking_point_id
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const QUERY_TRACKING_POINTS_BY_BAG_TAG_NO: &str = r"
  query getTrackingPointsByBagTagNo(
    $bag_tag_no: String!
    $journey: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
  ) {
    getTrackingPointsByBagTagNo(
      bag_tag_no: $bag_tag_no
      journey: $journey
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const QUERY_TRACKED_BAGS_BY_DATE: &str = r"
  query getTrackedBagsByDate($journey: String!, $date: String!) {
    getTrackedBagsByDate(journey: $journey, date: $date) {
      bag_tag_no
      journey
      status
      location
      updated_by
      last_updated
      origin
      origin_date
      destination
      destination_date
      vehicle_number
      additional_data
      damaged
      bag_images { name url type }
    }
  }
";

pub const QUERY_TRACKED_BAGS: &str = r"
  query getTrackedBags($journey: String!, $bags: [BagInput!]) {
    getTrackedBags(journey: $journey, bags: $bags) {
      bag_tag_no
      journey
      status
      location
      updated_by
      last_updated
      origin
      origin_date
      destination
      destination_date
      vehicle_number
      additional_data
      damaged
      bag_images { name url type }
    }
  }
";

pub const QUERY_TRACKED_BAGS_BY_BAG_TAG_NO: &str = r"
  query getTrackedBagsByBagTagNo(
    $bag_tag_no: String!
    $journey: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
  ) {
    getTrackedBagsByBagTagNo(
      bag_tag_no: $bag_tag_no
      journey: $journey
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
    ) {
      bag_tag_no
      journey
      status
      location
      updated_by
      last_updated
      origin
      origin_date
      destination
      destination_date
      vehicle_number
      additional_data
      damaged
      bag_images { name url type }
    }
  }
";

pub const QUERY_TRACKED_BAG_BY_BAG_TAG_NO: &str = r"
  query getTrackedBagByBagTagNo(
    $bag_tag_no: String!
    $journey: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
  ) {
    getTrackedBagByBagTagNo(
      bag_tag_no: $bag_tag_no
      journey: $journey
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
    ) {
      bag_tag_no
      journey
      status
      location
      updated_by
      last_updated
      origin
      origin_date
      destination
      destination_date
      vehicle_number
      additional_data
      damaged
      bag_images { name url type }
    }
  }
";

pub const QUERY_VEHICLE: &str = r"
  query getVehicle($journey: String) {
    getVehicle(journey: $journey) {
      vehicle_number
      journey
    }
  }
";

pub const MUTATION_START_TRACKING_POINT_JOURNEY: &str = r"
  mutation startTrackingPointJourney(
    $bag_tag_no: String!
    $journey: String!
    $status: String!
    $origin: String!
    $origin_date: String
    $destination: String!
    $destination_date: String
    $required_inputs: AWSJSON
  ) {
    startTrackingPointJourney(
      bag_tag_no: $bag_tag_no
      journey: $journey
      status: $status
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
      required_inputs: $required_inputs
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_GENERATE_BAG_ID: &str = r"
  mutation generateBagId(
    $journey: String!
    $status: String!
    $required_inputs: AWSJSON
  ) {
    generateBagId(
      journey: $journey
      status: $status
      required_inputs: $required_inputs
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_SAVE_TRACKING_POINT: &str = r"
  mutation saveTrackingPoint(
    $journey: String!
    $status: String!
    $bag_tag_no: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
    $vehicle_number: String
    $images: [ImageInput!]
    $required_inputs: AWSJSON
  ) {
    saveTrackingPoint(
      journey: $journey
      status: $status
      bag_tag_no: $bag_tag_no
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
      vehicle_number: $vehicle_number
      images: $images
      required_inputs: $required_inputs
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_SAVE_TRACKING_POINT_FOR_MULTIPLE_BAGS: &str = r"
  mutation saveTrackingPointForMultipleBags(
    $journey: String!
    $status: String!
    $bags: [BagInput!]
    $required_inputs: AWSJSON
  ) {
    saveTrackingPointForMultipleBags(
      journey: $journey
      status: $status
      bags: $bags
      required_inputs: $required_inputs
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_REVERT_TRACKING_POINT: &str = r"
  mutation revertTrackingPoint(
    $bag_tag_no: String!
    $tracking_point_id: String!
  ) {
    revertTrackingPoint(
      bag_tag_no: $bag_tag_no
      tracking_point_id: $tracking_point_id
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_MASS_UPDATE_TRACKING_POINT_STATUS: &str = r"
  mutation massUpdateTrackingPointStatus(
    $journey: String!
    $status: String!
    $new_status: String!
  ) {
    massUpdateTrackingPointStatus(
      journey: $journey
      status: $status
      new_status: $new_status
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_UPDATE_TRACKING_POINT_STATUS_REMOVED: &str = r"
  mutation updateTrackingPointStatusRemoved(
    $bag_tag_no: String!
    $journey: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
  ) {
    updateTrackingPointStatusRemoved(
      bag_tag_no: $bag_tag_no
      journey: $journey
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_SAVE_BAG_IMAGES: &str = r"
  mutation saveBagImages($bag_images: [BagImageInput!]) {
    saveBagImages(bag_images: $bag_images) {
      name
      url
      type
    }
  }
";

pub const MUTATION_SAVE_DAMAGED_BAG_IMAGES: &str = r"
  mutation saveDamagedBagImages($bag_images: [BagImageInput!]) {
    saveDamagedBagImages(bag_images: $bag_images) {
      name
      url
      type
    }
  }
";

pub const MUTATION_SAVE_VEHICLE: &str = r"
  mutation saveVehicle($vehicle_number: String!, $journey: String) {
    saveVehicle(vehicle_number: $vehicle_number, journey: $journey) {
      vehicle_number
      journey
    }
  }
";

pub const MUTATION_SAVE_TRACKING_POINTS_FOR_BAGS_ON_VEHICLE: &str = r"
  mutation saveTrackingPointsForBagsOnVehicle(
    $vehicle_number: String!
    $journey: String!
    $status: String!
  ) {
    saveTrackingPointsForBagsOnVehicle(
      vehicle_number: $vehicle_number
      journey: $journey
      status: $status
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";

pub const MUTATION_UPDATE_TRACKED_BAG: &str = r"
  mutation updateTrackedBag($bag: TrackedBagInput!) {
    updateTrackedBag(bag: $bag) {
      bag_tag_no
      journey
      status
      location
      updated_by
      last_updated
      origin
      origin_date
      destination
      destination_date
      vehicle_number
      additional_data
      damaged
      bag_images { name url type }
    }
  }
";

pub const MUTATION_REPORT_DAMAGE_BAG: &str = r"
  mutation reportDamageBag(
    $bag_tag_no: String!
    $journey: String!
    $images: [ImageInput!]
    $damage_description: String!
    $location: String!
    $origin: String
    $origin_date: String
    $destination: String
    $destination_date: String
  ) {
    reportDamageBag(
      bag_tag_no: $bag_tag_no
      journey: $journey
      images: $images
      damage_description: $damage_description
      location: $location
      origin: $origin
      origin_date: $origin_date
      destination: $destination
      destination_date: $destination_date
    ) {
      bag_tag_no
      tracking_point_id
      journey
      status
      location
      bpm
      timestamp
      reverted
      origin
      origin_date
      destination
      destination_date
      vehicle_action
      vehicle_number
      tracked_by
      damaged
      bag_images { name url type }
      additional_data
    }
  }
";
